//! 示例数据

use tracing::info;

use crate::app::category::model::CategoryFields;
use crate::app::item::model::ItemFields;
use crate::core::repository::{CategoryRepository, ItemRepository, StoreResult};

const SAMPLE: &[(&str, &[(&str, &str, f64)])] = &[
    (
        "Tools",
        &[
            ("Claw hammer", "https://example.com/img/hammer.png", 9.99),
            ("Hand saw", "https://example.com/img/saw.png", 14.5),
        ],
    ),
    (
        "Garden",
        &[("Leaf rake", "https://example.com/img/rake.png", 12.0)],
    ),
];

/// 仅在两个集合都为空时写入，返回写入的物品数
pub async fn seed_sample_data(
    categories: &dyn CategoryRepository,
    items: &dyn ItemRepository,
) -> StoreResult<usize> {
    if categories.count().await? > 0 || items.count().await? > 0 {
        info!("Store already contains data, skipping seed");
        return Ok(0);
    }

    let mut created = 0;
    for (category_name, samples) in SAMPLE {
        let category = categories
            .create(CategoryFields {
                name: category_name.to_string(),
            })
            .await?;
        for (name, img_url, price) in samples.iter() {
            items
                .create(ItemFields {
                    name: name.to_string(),
                    img_url: img_url.to_string(),
                    price: *price,
                    category: vec![category.id],
                })
                .await?;
            created += 1;
        }
    }

    info!(items = created, categories = SAMPLE.len(), "Seeded sample data");
    Ok(created)
}
