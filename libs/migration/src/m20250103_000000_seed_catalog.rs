use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Insert categories
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO categories (id, title, image, created_at, updated_at)
            VALUES
                (1, 'Annuals', '/category_img/1.jpg', NOW(), NOW()),
                (2, 'Nursery', '/category_img/2.jpg', NOW(), NOW()),
                (3, 'Garden Art', '/category_img/3.jpg', NOW(), NOW()),
                (4, 'Plant Care', '/category_img/4.jpg', NOW(), NOW()),
                (5, 'Seasonal', '/category_img/5.jpg', NOW(), NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Insert products
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO products (
                id, title, price, discont_price, description, image,
                category_id, created_at, updated_at
            )
            VALUES
                (
                    1, 'Marigold Mix', 12.0, NULL,
                    'Tray of mixed marigolds for sunny beds and borders.',
                    '/product_img/1.jpg', 1, NOW(), NOW()
                ),
                (
                    2, 'Petunia Cascade', 16.0, 9.0,
                    'Trailing petunias suited to baskets and window boxes.',
                    '/product_img/2.jpg', 1, NOW(), NOW()
                ),
                (
                    3, 'Snapdragon Tall Blend', 14.0, NULL,
                    'Upright snapdragons in warm tones, sold as a six pack.',
                    '/product_img/3.jpg', 1, NOW(), NOW()
                ),
                (
                    4, 'Dwarf Apple Tree', 89.0, 64.0,
                    'Two year old dwarf apple on hardy rootstock.',
                    '/product_img/4.jpg', 2, NOW(), NOW()
                ),
                (
                    5, 'Boxwood Shrub', 45.0, NULL,
                    'Evergreen boxwood for low hedging, container grown.',
                    '/product_img/5.jpg', 2, NOW(), NOW()
                ),
                (
                    6, 'Japanese Maple', 120.0, 95.0,
                    'Slow growing maple with deep red spring foliage.',
                    '/product_img/6.jpg', 2, NOW(), NOW()
                ),
                (
                    7, 'Cast Iron Bird Bath', 150.0, NULL,
                    'Weatherproof bird bath on a fluted pedestal.',
                    '/product_img/7.jpg', 3, NOW(), NOW()
                ),
                (
                    8, 'Glazed Ceramic Planter', 38.0, 29.0,
                    'Frost resistant planter with a cobalt glaze.',
                    '/product_img/8.jpg', 3, NOW(), NOW()
                ),
                (
                    9, 'Solar Path Lights', 55.0, 42.0,
                    'Set of eight stainless solar lights for walkways.',
                    '/product_img/9.jpg', 3, NOW(), NOW()
                ),
                (
                    10, 'Organic Tomato Feed', 18.0, NULL,
                    'Liquid feed for heavy cropping tomatoes, one litre.',
                    '/product_img/10.jpg', 4, NOW(), NOW()
                ),
                (
                    11, 'Bypass Secateurs', 32.0, 24.0,
                    'Forged bypass secateurs with replaceable blade.',
                    '/product_img/11.jpg', 4, NOW(), NOW()
                ),
                (
                    12, 'Spring Bulb Collection', 25.0, NULL,
                    'Mixed daffodil, tulip and crocus bulbs, fifty count.',
                    '/product_img/12.jpg', 5, NOW(), NOW()
                )
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Keep the serial sequences ahead of the seeded ids
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories));
            SELECT setval(pg_get_serial_sequence('products', 'id'), (SELECT MAX(id) FROM products));
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM products WHERE id BETWEEN 1 AND 12")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DELETE FROM categories WHERE id BETWEEN 1 AND 5")
            .await?;

        Ok(())
    }
}
