//! 分类表单

use validator::Validate;

use super::model::{Category, CategoryFields};
use crate::app::validation::{field_errors, FieldError};

const FIELDS: &[(&str, &str)] = &[("name", "name")];

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 1, message = "Category name required"))]
    pub name: String,
}

impl CategoryForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = CategoryForm::default();
        for (key, value) in pairs {
            if key == "name" {
                form.name = value.trim().to_string();
            }
        }
        form
    }

    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
        }
    }

    pub fn check(&self) -> Vec<FieldError> {
        field_errors(self.validate(), FIELDS)
    }

    pub fn into_fields(self) -> Result<CategoryFields, (Self, Vec<FieldError>)> {
        let errors = self.check();
        if errors.is_empty() {
            Ok(CategoryFields { name: self.name })
        } else {
            Err((self, errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required_after_trim() {
        let form = CategoryForm::from_pairs(vec![("name".into(), "   ".into())]);
        assert_eq!(form.name, "");
        let (_, errors) = form.into_fields().unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", "Category name required")]);
    }

    #[test]
    fn test_missing_name_field() {
        let form = CategoryForm::from_pairs(Vec::new());
        assert_eq!(form.check().len(), 1);
    }

    #[test]
    fn test_valid_name_is_trimmed() {
        let form = CategoryForm::from_pairs(vec![("name".into(), " Tools ".into())]);
        let fields = form.into_fields().unwrap();
        assert_eq!(fields.name, "Tools");
    }
}
