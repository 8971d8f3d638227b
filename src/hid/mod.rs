pub mod report_descriptor;

#[cfg(test)]
mod report_descriptor_test;
