//! 物品表单：归一化、校验规则与分类勾选状态

use std::borrow::Cow;

use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::model::{Item, ItemFields};
use crate::app::category::model::Category;
use crate::app::validation::{field_errors, FieldError};

pub const NAME_MAX_LEN: usize = 100;
pub const IMG_URL_MAX_LEN: usize = 500;

const FIELDS: &[(&str, &str)] = &[("name", "name"), ("img_url", "imgUrl"), ("price", "price")];

/// 提交的物品表单，保留用户输入的原始文本以便回显
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ItemForm {
    #[validate(
        length(min = 1, message = "Item name required"),
        custom(function = "name_max_length")
    )]
    pub name: String,

    #[validate(
        length(min = 1, message = "Image URL required"),
        custom(function = "img_url_max_length")
    )]
    pub img_url: String,

    #[validate(custom(function = "numeric_price"))]
    pub price: String,

    /// 勾选的分类 id；未提交时为空，单个值时为单元素列表
    pub category: Vec<String>,
}

impl ItemForm {
    /// 从 urlencoded 键值对构造，`name` 与 `imgUrl` 去除首尾空白
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = ItemForm::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value.trim().to_string(),
                "imgUrl" => form.img_url = value.trim().to_string(),
                "price" => form.price = value,
                "category" => form.category.push(value),
                _ => {}
            }
        }
        form
    }

    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            img_url: item.img_url.clone(),
            price: item.price.to_string(),
            category: item.category.iter().map(Uuid::to_string).collect(),
        }
    }

    /// 只检查字段本身，不涉及存储
    pub fn check(&self) -> Vec<FieldError> {
        field_errors(self.validate(), FIELDS)
    }

    /// 字段校验加上分类引用检查：每个提交的 id 都必须出现在 `known` 中
    pub fn validate_against(&self, known: &[Category]) -> Result<ItemFields, Vec<FieldError>> {
        let mut errors = self.check();

        let mut category = Vec::new();
        let mut unknown = false;
        for raw in &self.category {
            let resolved = parse_id(raw).filter(|id| known.iter().any(|c| c.id == *id));
            match resolved {
                Some(id) if !category.contains(&id) => category.push(id),
                Some(_) => {}
                None => unknown = true,
            }
        }
        if unknown {
            errors.push(FieldError::new("category", "Unknown category"));
        }

        match parse_price(&self.price) {
            Some(price) if errors.is_empty() => Ok(ItemFields {
                name: self.name.clone(),
                img_url: self.img_url.clone(),
                price,
                category,
            }),
            _ => Err(errors),
        }
    }
}

/// 表单中的分类复选框
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChoice {
    pub category: Category,
    pub checked: bool,
}

/// 标记之前选中的分类；无法识别的 id 不会勾选任何项
pub fn mark_selected(categories: Vec<Category>, selected: &[String]) -> Vec<CategoryChoice> {
    let selected: Vec<Uuid> = selected.iter().filter_map(|raw| parse_id(raw)).collect();
    categories
        .into_iter()
        .map(|category| CategoryChoice {
            checked: selected.contains(&category.id),
            category,
        })
        .collect()
}

fn parse_id(raw: &str) -> Option<Uuid> {
    raw.trim().parse().ok()
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|price| price.is_finite())
}

fn too_long(max: usize, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("max_length").with_message(Cow::Borrowed(message));
    error.add_param(Cow::Borrowed("max"), &max);
    error
}

fn name_max_length(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > NAME_MAX_LEN {
        return Err(too_long(NAME_MAX_LEN, "Item name must be at most 100 characters"));
    }
    Ok(())
}

fn img_url_max_length(img_url: &str) -> Result<(), ValidationError> {
    if img_url.chars().count() > IMG_URL_MAX_LEN {
        return Err(too_long(IMG_URL_MAX_LEN, "Image URL must be at most 500 characters"));
    }
    Ok(())
}

fn numeric_price(price: &str) -> Result<(), ValidationError> {
    match parse_price(price) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("numeric").with_message(Cow::Borrowed("Price must be a number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn tools() -> Category {
        Category {
            id: Uuid::new_v4(),
            name: "Tools".to_string(),
        }
    }

    #[test]
    fn test_category_normalization() {
        let form = ItemForm::from_pairs(pairs(&[("name", "Hammer")]));
        assert!(form.category.is_empty());

        let form = ItemForm::from_pairs(pairs(&[("category", "a")]));
        assert_eq!(form.category, vec!["a"]);

        let form = ItemForm::from_pairs(pairs(&[("category", "a"), ("name", "x"), ("category", "b")]));
        assert_eq!(form.category, vec!["a", "b"]);
    }

    #[test]
    fn test_trims_name_and_img_url() {
        let form = ItemForm::from_pairs(pairs(&[
            ("name", "  Hammer "),
            ("imgUrl", "\thttp://x/h.png\n"),
            ("price", "9.99"),
        ]));
        assert_eq!(form.name, "Hammer");
        assert_eq!(form.img_url, "http://x/h.png");
        assert!(form.check().is_empty());
    }

    #[test]
    fn test_whitespace_name_is_required() {
        let form = ItemForm::from_pairs(pairs(&[("name", "   "), ("imgUrl", "u"), ("price", "1")]));
        let errors = form.check();
        assert_eq!(errors, vec![FieldError::new("name", "Item name required")]);
    }

    #[test]
    fn test_errors_follow_field_order() {
        let form = ItemForm::from_pairs(pairs(&[("price", "cheap")]));
        let fields: Vec<&str> = form.check().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "imgUrl", "price"]);
    }

    #[test]
    fn test_price_must_be_finite_number() {
        for bad in ["", "abc", "9,99", "inf", "NaN", "1e400"] {
            let form = ItemForm {
                name: "Hammer".into(),
                img_url: "u".into(),
                price: bad.into(),
                category: Vec::new(),
            };
            assert_eq!(
                form.check(),
                vec![FieldError::new("price", "Price must be a number")],
                "price {:?}",
                bad
            );
        }
        for good in ["0", "-3", "9.99", "1e3", ".5"] {
            let form = ItemForm {
                name: "Hammer".into(),
                img_url: "u".into(),
                price: good.into(),
                category: Vec::new(),
            };
            assert!(form.check().is_empty(), "price {:?}", good);
        }
    }

    #[test]
    fn test_length_limits() {
        let form = ItemForm {
            name: "n".repeat(NAME_MAX_LEN + 1),
            img_url: "u".repeat(IMG_URL_MAX_LEN + 1),
            price: "1".into(),
            category: Vec::new(),
        };
        let fields: Vec<&str> = form.check().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "imgUrl"]);

        let form = ItemForm {
            name: "n".repeat(NAME_MAX_LEN),
            img_url: "u".repeat(IMG_URL_MAX_LEN),
            price: "1".into(),
            category: Vec::new(),
        };
        assert!(form.check().is_empty());
    }

    #[test]
    fn test_validate_against_known_categories() {
        let tools = tools();
        let form = ItemForm {
            name: "Hammer".into(),
            img_url: "http://x/h.png".into(),
            price: "9.99".into(),
            category: vec![tools.id.to_string(), tools.id.to_string()],
        };
        let fields = form.validate_against(std::slice::from_ref(&tools)).unwrap();
        assert_eq!(fields.price, 9.99);
        assert_eq!(fields.category, vec![tools.id]);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let tools = tools();
        let form = ItemForm {
            name: "Hammer".into(),
            img_url: "http://x/h.png".into(),
            price: "9.99".into(),
            category: vec![tools.id.to_string(), "<script>".into(), Uuid::new_v4().to_string()],
        };
        let errors = form.validate_against(&[tools]).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("category", "Unknown category")]);
    }

    #[test]
    fn test_mark_selected_ignores_tampered_ids() {
        let tools = tools();
        let garden = Category {
            id: Uuid::new_v4(),
            name: "Garden".into(),
        };
        let selected = vec![garden.id.to_string(), "not-an-id".into(), Uuid::new_v4().to_string()];

        let choices = mark_selected(vec![garden.clone(), tools.clone()], &selected);
        assert_eq!(choices.len(), 2);
        assert!(choices[0].checked);
        assert!(!choices[1].checked);

        let choices = mark_selected(vec![tools], &["bogus".to_string()]);
        assert!(choices.iter().all(|c| !c.checked));
    }

    #[test]
    fn test_from_item_round_trips_price_text() {
        let item = Item {
            id: Uuid::new_v4(),
            name: "Hammer".into(),
            img_url: "http://x/h.png".into(),
            price: 9.99,
            category: Vec::new(),
        };
        let form = ItemForm::from_item(&item);
        assert_eq!(form.price, "9.99");
        assert!(form.check().is_empty());
    }
}
