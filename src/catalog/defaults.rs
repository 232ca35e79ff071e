//! Built-in catalog seed data
//!
//! Used on first load and whenever a stored collection is missing or corrupt.

use super::types::{Barber, Category, LocalizedText, Service};

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    slug: &str,
    title: (&str, &str),
    description: (&str, &str),
    price: u64,
    duration: u32,
    category: Category,
    image_url: &str,
) -> Service {
    Service {
        id: id.to_string(),
        slug: slug.to_string(),
        title: LocalizedText::new(title.0, title.1),
        description: LocalizedText::new(description.0, description.1),
        price,
        duration,
        category,
        image_url: image_url.to_string(),
    }
}

/// The seeded service catalog
pub fn default_services() -> Vec<Service> {
    vec![
        service(
            "1",
            "signature-cut",
            ("Cắt Tóc Signature", "Signature Cut"),
            (
                "Tư vấn kiểu tóc, cắt tạo kiểu, gội và sấy hoàn thiện.",
                "Style consultation, precision cut, wash and finishing blow-dry.",
            ),
            250_000,
            45,
            Category::Hair,
            "https://images.unsplash.com/photo-1503951914875-452162b0f3f1",
        ),
        service(
            "2",
            "classic-fade",
            ("Fade Cổ Điển", "Classic Fade"),
            (
                "Fade sắc nét bằng tông đơ và kéo, hoàn thiện bằng dao cạo viền.",
                "Sharp clipper-and-scissor fade, finished with a razor line-up.",
            ),
            200_000,
            40,
            Category::Hair,
            "https://images.unsplash.com/photo-1599351431202-1e0f0137899a",
        ),
        service(
            "3",
            "hot-towel-shave",
            ("Cạo Râu Khăn Nóng", "Hot Towel Shave"),
            (
                "Cạo râu truyền thống bằng dao thẳng với khăn nóng và tinh dầu.",
                "Traditional straight-razor shave with hot towels and essential oils.",
            ),
            180_000,
            30,
            Category::Beard,
            "https://images.unsplash.com/photo-1621605815971-fbc98d665033",
        ),
        service(
            "4",
            "beard-sculpting",
            ("Tạo Hình Râu", "Beard Sculpting"),
            (
                "Tỉa và tạo dáng râu theo khuôn mặt, dưỡng bằng sáp chuyên dụng.",
                "Beard trim and shaping to your face, conditioned with balm.",
            ),
            150_000,
            30,
            Category::Beard,
            "https://images.unsplash.com/photo-1622286342621-4bd786c2447c",
        ),
        service(
            "5",
            "charcoal-facial",
            ("Chăm Sóc Da Than Hoạt Tính", "Charcoal Facial"),
            (
                "Làm sạch sâu với mặt nạ than hoạt tính và massage mặt thư giãn.",
                "Deep-cleansing charcoal mask with a relaxing facial massage.",
            ),
            350_000,
            50,
            Category::Spa,
            "https://images.unsplash.com/photo-1570172619644-dfd03ed5d881",
        ),
        service(
            "6",
            "royal-package",
            ("Gói Hoàng Gia", "Royal Package"),
            (
                "Cắt tóc, cạo râu khăn nóng, chăm sóc da và massage vai gáy.",
                "Haircut, hot towel shave, facial and neck-and-shoulder massage.",
            ),
            750_000,
            120,
            Category::Spa,
            "https://images.unsplash.com/photo-1585747860715-2ba37e788b70",
        ),
    ]
}

/// The static barber roster
pub fn default_barbers() -> Vec<Barber> {
    vec![
        Barber {
            id: "b1".to_string(),
            name: "Minh Trần".to_string(),
            specialty: LocalizedText::new("Chuyên gia Fade", "Fade Specialist"),
            image_url: "https://images.unsplash.com/photo-1534308143481-c55f00be8bd7".to_string(),
        },
        Barber {
            id: "b2".to_string(),
            name: "Hoàng Lê".to_string(),
            specialty: LocalizedText::new("Bậc thầy Cạo Râu", "Master Shaver"),
            image_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e".to_string(),
        },
        Barber {
            id: "b3".to_string(),
            name: "Đức Phạm".to_string(),
            specialty: LocalizedText::new("Tạo Kiểu Cổ Điển", "Classic Styling"),
            image_url: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d".to_string(),
        },
    ]
}

/// Find a barber from the static roster by id
pub fn find_barber(id: &str) -> Option<Barber> {
    default_barbers().into_iter().find(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_services_cover_every_category() {
        let services = default_services();
        for category in Category::all() {
            assert!(services.iter().any(|s| s.category == *category));
        }
    }

    #[test]
    fn test_default_ids_are_unique() {
        let services = default_services();
        let ids: HashSet<_> = services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), services.len());

        let barbers = default_barbers();
        let ids: HashSet<_> = barbers.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), barbers.len());
    }

    #[test]
    fn test_find_barber() {
        assert_eq!(find_barber("b2").unwrap().name, "Hoàng Lê");
        assert!(find_barber("nobody").is_none());
    }
}
