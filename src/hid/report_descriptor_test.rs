use super::report_descriptor::{
    global_item, main_item, validate, DescriptorError, Item, ItemKind, Items,
};

static BALANCED: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xa1, 0x01, // Collection (Application)
    0x85, 0x01, //  Report ID (1)
    0x26, 0xff, 0x00, //  Logical Maximum (255)
    0x81, 0x02, //  Input (Data,Var,Abs)
    0xc0, // End Collection
];

#[test]
fn test_tokenize_items() {
    let items: Vec<Item> = Items::new(BALANCED)
        .collect::<Result<_, _>>()
        .expect("descriptor should tokenize");
    assert_eq!(items.len(), 7);

    assert_eq!(items[0].kind, ItemKind::Global);
    assert_eq!(items[0].tag, global_item::USAGE_PAGE);
    assert_eq!(items[0].data, &[0x01][..]);

    assert_eq!(
        items[4].data,
        &[0xff, 0x00][..],
        "two byte logical maximum payload"
    );

    assert_eq!(items[6].kind, ItemKind::Main);
    assert_eq!(items[6].tag, main_item::END_COLLECTION);
    assert_eq!(items[6].offset, BALANCED.len() - 1);
}

#[test]
fn test_validate_balanced() {
    validate(BALANCED).expect("balanced descriptor should validate");
    validate(&[]).expect("empty descriptor holds the invariants trivially");
}

#[test]
fn test_validate_unclosed_collection() {
    let truncated = &BALANCED[..BALANCED.len() - 1];
    assert_eq!(
        validate(truncated),
        Err(DescriptorError::UnclosedCollection { depth: 1 })
    );
}

#[test]
fn test_validate_unmatched_end_collection() {
    let mut extra = BALANCED.to_vec();
    extra.push(0xc0);
    assert_eq!(
        validate(&extra),
        Err(DescriptorError::UnmatchedEndCollection {
            offset: BALANCED.len()
        })
    );

    assert_eq!(
        validate(&[0xc0]),
        Err(DescriptorError::UnmatchedEndCollection { offset: 0 })
    );
}

#[test]
fn test_validate_truncated_item() {
    // Logical Maximum declaring two payload bytes with only one present.
    assert_eq!(
        validate(&[0x26, 0xff]),
        Err(DescriptorError::TruncatedItem {
            offset: 0,
            declared: 2,
            available: 1,
        })
    );
}
