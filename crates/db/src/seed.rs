//! Sample catalog for local development.
//!
//! Replaces the contents of `products` and `looks` with 8 products and 6
//! looks alternating video and image. Everything happens in one transaction,
//! so a failed seed leaves the previous data in place.

use lookbook_core::error::CoreError;
use lookbook_core::look::ContentType;
use lookbook_core::types::ResourceId;
use validator::Validate;

use crate::models::look::{CreateHotspot, CreateLook};
use crate::models::product::CreateProduct;
use crate::repositories::{LookRepo, ProductRepo};
use crate::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid seed data: {0}")]
    Invalid(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// What a seed run inserted.
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub product_ids: Vec<ResourceId>,
    pub look_ids: Vec<ResourceId>,
}

struct SampleProduct {
    name: &'static str,
    price: f64,
    description: &'static str,
    image_url: &'static str,
}

struct SampleLook {
    title: &'static str,
    content_type: ContentType,
    media_url: &'static str,
    /// Indices into [`PRODUCTS`].
    products: &'static [usize],
    /// `(x, y, index into products)` for image looks.
    hotspots: &'static [(f64, f64, usize)],
}

const PRODUCTS: &[SampleProduct] = &[
    SampleProduct {
        name: "Classic White Sneakers",
        price: 129.99,
        description: "Comfortable white leather sneakers with a cushioned sole for all-day wear.",
        image_url: "https://images.unsplash.com/photo-1549298916-b41d501d3772?auto=format&fit=crop&w=600&q=80",
    },
    SampleProduct {
        name: "Vintage Denim Jacket",
        price: 89.99,
        description: "Blue denim jacket with a vintage wash, made from heavyweight cotton.",
        image_url: "https://images.unsplash.com/photo-1576871337632-b9aef4c17ab9?auto=format&fit=crop&w=600&q=80",
    },
    SampleProduct {
        name: "Black Crossbody Bag",
        price: 65.99,
        description: "Black leather crossbody bag with an adjustable strap and several compartments.",
        image_url: "https://images.unsplash.com/photo-1584917865442-de89df76afd3?auto=format&fit=crop&w=600&q=80",
    },
    SampleProduct {
        name: "Oversized Sunglasses",
        price: 45.99,
        description: "Oversized black-frame sunglasses with UV protection.",
        image_url: "https://images.unsplash.com/photo-1511499767150-a48a237f0083?auto=format&fit=crop&w=600&q=80",
    },
    SampleProduct {
        name: "Slim Fit Black Jeans",
        price: 79.99,
        description: "Slim fit jeans in black stretch denim.",
        image_url: "https://images.unsplash.com/photo-1542272604-787c3835535d?auto=format&fit=crop&w=600&q=80",
    },
    SampleProduct {
        name: "Minimalist Watch",
        price: 199.99,
        description: "Clean-faced watch on a genuine leather strap.",
        image_url: "https://images.unsplash.com/photo-1524592094714-0f0654e20314?auto=format&fit=crop&w=600&q=80",
    },
    SampleProduct {
        name: "Knit Sweater",
        price: 95.99,
        description: "Relaxed fit sweater in a premium wool blend.",
        image_url: "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?auto=format&fit=crop&w=600&q=80",
    },
    SampleProduct {
        name: "Baseball Cap",
        price: 29.99,
        description: "Cotton baseball cap with an adjustable strap and embroidered logo.",
        image_url: "https://images.unsplash.com/photo-1588850561407-ed78c282e89b?auto=format&fit=crop&w=600&q=80",
    },
];

const LOOKS: &[SampleLook] = &[
    SampleLook {
        title: "Casual Streetwear",
        content_type: ContentType::Video,
        media_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
        products: &[0, 1, 7, 2],
        hotspots: &[],
    },
    SampleLook {
        title: "Urban Chic",
        content_type: ContentType::Image,
        media_url: "https://images.unsplash.com/photo-1469334031218-e382a71b716b?auto=format&fit=crop&w=600&q=80",
        products: &[3, 4, 5],
        hotspots: &[(48.0, 18.0, 3), (45.0, 70.0, 4), (30.0, 52.0, 5)],
    },
    SampleLook {
        title: "Minimalist Style",
        content_type: ContentType::Video,
        media_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
        products: &[5],
        hotspots: &[],
    },
    SampleLook {
        title: "Cozy Winter",
        content_type: ContentType::Image,
        media_url: "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?auto=format&fit=crop&w=600&q=80",
        products: &[6, 7],
        hotspots: &[(50.0, 45.0, 6), (52.0, 12.0, 7)],
    },
    SampleLook {
        title: "Summer Vibes",
        content_type: ContentType::Video,
        media_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
        products: &[3, 0, 2, 4, 6],
        hotspots: &[],
    },
    SampleLook {
        title: "Evening Elegance",
        content_type: ContentType::Image,
        media_url: "https://images.unsplash.com/photo-1503185912284-5271ff81b9a8?auto=format&fit=crop&w=600&q=80",
        products: &[1],
        hotspots: &[(55.0, 40.0, 1)],
    },
];

/// Clear both tables and insert the sample catalog.
pub async fn seed(pool: &DbPool) -> Result<SeedSummary, SeedError> {
    let mut tx = pool.begin().await?;

    let looks_removed = LookRepo::delete_all_in_tx(&mut tx).await?;
    let products_removed = ProductRepo::delete_all_in_tx(&mut tx).await?;
    tracing::info!(looks_removed, products_removed, "Cleared existing catalog");

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for sample in PRODUCTS {
        let input = CreateProduct {
            name: sample.name.to_string(),
            price: sample.price,
            description: sample.description.to_string(),
            image_url: sample.image_url.to_string(),
        };
        input.validate().map_err(CoreError::from)?;

        let id = ResourceId::generate();
        let product = ProductRepo::insert_in_tx(&mut tx, &id, &input).await?;
        tracing::info!(id = %product.id, name = %product.name, "Inserted product");
        product_ids.push(id);
    }

    let mut look_ids = Vec::with_capacity(LOOKS.len());
    for sample in LOOKS {
        let input = CreateLook {
            title: sample.title.to_string(),
            content_type: sample.content_type,
            media_url: sample.media_url.to_string(),
            product_ids: sample.products.iter().map(|&i| product_ids[i].clone()).collect(),
            hotspots: sample
                .hotspots
                .iter()
                .map(|&(x, y, i)| CreateHotspot {
                    x,
                    y,
                    product_id: product_ids[i].clone(),
                })
                .collect(),
        };
        input.check()?;

        let id = ResourceId::generate();
        let look = LookRepo::insert_in_tx(&mut tx, &id, &input).await?;
        tracing::info!(
            id = %look.id,
            title = %look.title,
            content_type = %look.content_type,
            products = look.product_ids.len(),
            "Inserted look"
        );
        look_ids.push(id);
    }

    tx.commit().await?;

    Ok(SeedSummary {
        product_ids,
        look_ids,
    })
}
