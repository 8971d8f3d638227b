use std::error::Error;

use crate::hid::report_descriptor::{main_item, validate, ItemKind, Items};
use crate::quirks::Signature;

use super::driver;
use super::report_descriptor::{DEFECTIVE_LENGTH, DEFECTIVE_PREFIX, REPORT_DESCRIPTOR};

#[test]
fn test_replacement_is_well_formed() {
    validate(&REPORT_DESCRIPTOR).expect("corrected descriptor should validate");
}

#[test]
fn test_collection_balance() -> Result<(), Box<dyn Error>> {
    let mut opens = 0;
    let mut closes = 0;
    let mut depth: i32 = 0;

    for item in Items::new(&REPORT_DESCRIPTOR) {
        let item = item?;
        if item.kind != ItemKind::Main {
            continue;
        }
        match item.tag {
            main_item::COLLECTION => {
                opens += 1;
                depth += 1;
            }
            main_item::END_COLLECTION => {
                closes += 1;
                depth -= 1;
            }
            _ => (),
        }
        assert!(depth >= 0, "nesting must never go negative");
    }

    assert_eq!(opens, closes, "every opened collection must be closed");
    assert_eq!(depth, 0);
    // keyboard, consumer control + keypad, mouse + pointer
    assert_eq!(opens, 5);

    Ok(())
}

#[test]
fn test_signature_does_not_match_replacement() {
    let signature = Signature::new(DEFECTIVE_LENGTH, &DEFECTIVE_PREFIX);
    assert!(
        !signature.matches(&REPORT_DESCRIPTOR),
        "the corrected table must not look defective itself"
    );
}

#[test]
fn test_quirk_builds() {
    driver::quirk().expect("the g20s quirk entry should validate");
}
