use crate::domain::{requests::product::ProductCreateInput, response::product::ProductView};
use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn check_name(name: &str, errors: &mut ValidationErrors) {
    if name.trim().is_empty() {
        errors.add("name", violation("required", "Product name is required"));
        return;
    }

    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        errors.add(
            "name",
            violation("length", "Name must be between 2 and 100 characters"),
        );
    }
}

fn check_description(description: &str, errors: &mut ValidationErrors) {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.add(
            "description",
            violation("length", "Description can be at most 500 characters"),
        );
    }
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl Validate for ProductCreateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_name(&self.name, &mut errors);
        check_description(&self.description, &mut errors);

        if self.price < 0 {
            errors.add("price", violation("range", "Price must be non-negative"));
        }

        into_result(errors)
    }
}

impl Validate for ProductView {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_name(&self.name, &mut errors);
        check_description(&self.description, &mut errors);

        if self.price < Decimal::ZERO || self.price > Decimal::from(i32::MAX) {
            errors.add(
                "price",
                violation("range", "Price must be between 0 and 2147483647"),
            );
        }

        into_result(errors)
    }
}
