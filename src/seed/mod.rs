use chrono::NaiveDate;

use crate::catalog::CatalogError;
use crate::models::Product;

/// Row of the literal catalog definition:
/// (id, name, sku, price, qty, image file, category, max qty, dates)
type SeedRow = (
    i64,
    &'static str,
    &'static str,
    f64,
    i64,
    &'static str,
    &'static str,
    i64,
    Option<(&'static str, &'static str)>,
);

#[rustfmt::skip]
static PRODUCTS: &[SeedRow] = &[
    (1, "เครื่องวัดความดัน Omron HEM-7121", "OMR-7121", 2500.0, 8, "omron-hem-7121.jpeg", "เครื่องมือวัดสุขภาพ", 100, None),
    (2, "ปรอทวัดไข้ดิจิตอล Terumo C205", "TRM-C205", 350.0, 120, "terumo-c205.png", "เครื่องมือวัดสุขภาพ", 150, None),
    // qty above maxQty on purpose: the ceiling is advisory
    (3, "เครื่องวัดออกซิเจนปลายนิ้ว Jumper JPD-500D", "JMP-500D", 990.0, 85, "jumper-jpd-500d.png", "เครื่องมือวัดสุขภาพ", 80, None),
    (4, "หน้ากากอนามัย 3M (50 ชิ้น)", "3M-MASK-50", 150.0, 500, "3m-mask.png", "วัสดุสิ้นเปลืองทางการแพทย์", 2000, Some(("2023-01-15", "2026-01-14"))),
    // low stock example
    (5, "เจลแอลกอฮอล์ ศิริบัญชา 450ml", "SRB-GEL-450", 85.0, 25, "siribuncha-gel.png", "ผลิตภัณฑ์ฆ่าเชื้อ", 300, Some(("2023-06-20", "2025-06-19"))),
    (6, "ชุดตรวจ ATK Gica (Nasal)", "GICA-ATK-N", 45.0, 1000, "atk-gica.png", "ชุดตรวจวินิจฉัย", 1000, Some(("2023-09-01", "2025-08-31"))),
];

fn parse_date(raw: &str) -> Result<NaiveDate, CatalogError> {
    raw.parse().map_err(|source| CatalogError::InvalidDate {
        value: raw.to_string(),
        source,
    })
}

/// Build the fixed catalog records, in id order. Image URLs are
/// `{image_base_url}/{file}`.
pub fn products(image_base_url: &str) -> Result<Vec<Product>, CatalogError> {
    let base = image_base_url.trim_end_matches('/');
    PRODUCTS
        .iter()
        .map(|&(id, name, sku, price, qty, image, category, max_qty, dates)| -> Result<Product, CatalogError> {
            let (production_date, expiry_date) = match dates {
                Some((produced, expires)) => (Some(parse_date(produced)?), Some(parse_date(expires)?)),
                None => (None, None),
            };
            Ok(Product {
                id,
                name: name.to_string(),
                sku: sku.to_string(),
                price,
                qty,
                image_url: format!("{}/{}", base, image),
                category: category.to_string(),
                max_qty,
                production_date,
                expiry_date,
            })
        })
        .collect()
}
