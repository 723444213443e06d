//! 데모용 매물 데이터 생성기
//!
//! `POST /api/properties/auto`와 `POST /api/properties/seed`에서 사용하는
//! 샘플 매물을 만듭니다.

use rand::{seq::IndexedRandom, Rng};
use crate::domain::entities::properties::Property;

const NAMES: [&str; 6] = [
    "Apto Centro",
    "Casa Norte",
    "Loft Chicó",
    "Studio Parque",
    "Penthouse Sur",
    "Dúplex Cedritos",
];

const STREETS: [&str; 4] = ["Cra", "Cl", "Av", "Trans"];

const ZONES: [&str; 5] = ["Bogotá", "Medellín", "Cali", "Barranquilla", "Bucaramanga"];

/// 가격 단위 (백만)
const PRICE_UNIT: f64 = 1_000_000.0;

/// 임의의 매물 하나를 생성합니다.
///
/// 가격은 120M 이상 1200M 미만의 백만 단위 값입니다.
pub fn random_property<R: Rng>(rng: &mut R) -> Property {
    let name = NAMES.choose(rng).copied().unwrap_or_default();
    let street = STREETS.choose(rng).copied().unwrap_or_default();
    let zone = ZONES.choose(rng).copied().unwrap_or_default();

    let address = format!(
        "{} {} #{}-{}, {}",
        street,
        rng.random_range(1..160),
        rng.random_range(1..100),
        rng.random_range(1..100),
        zone,
    );
    let price = rng.random_range(120..1200) as f64 * PRICE_UNIT;
    let image = format!("https://picsum.photos/seed/{}/600/400", rng.random_range(1..9999));

    Property::new(
        format!("own-{}", rng.random_range(100..999)),
        name.to_string(),
        address,
        price,
        image,
    )
}

/// `count`개의 임의 매물을 생성합니다.
pub fn random_batch(count: usize) -> Vec<Property> {
    let mut rng = rand::rng();
    (0..count).map(|_| random_property(&mut rng)).collect()
}

/// 빈 컬렉션에 넣을 고정 데모 매물 3건
pub fn demo_properties() -> Vec<Property> {
    [
        ("own-001", "Apto Centro", "Cra 7 #12-34, Bogotá", 350_000_000.0, 1),
        ("own-002", "Casa Norte", "Cl 150 #20-50, Bogotá", 890_000_000.0, 2),
        ("own-003", "Loft Chicó", "Cra 11 #86-15, Bogotá", 620_000_000.0, 3),
    ]
    .into_iter()
    .map(|(owner, name, address, price, seed)| {
        Property::new(
            owner.to_string(),
            name.to_string(),
            address.to_string(),
            price,
            format!("https://picsum.photos/seed/{}/600/400", seed),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_property_shape() {
        let mut rng = rand::rng();

        for _ in 0..50 {
            let property = random_property(&mut rng);

            assert!(NAMES.contains(&property.name.as_str()));
            assert!(property.id_owner.starts_with("own-"));
            assert!(property.price_property >= 120.0 * PRICE_UNIT);
            assert!(property.price_property < 1200.0 * PRICE_UNIT);
            assert_eq!(property.price_property % PRICE_UNIT, 0.0);
            assert!(property.image.starts_with("https://picsum.photos/seed/"));
            assert!(ZONES.iter().any(|zone| property.address_property.ends_with(zone)));
            assert!(property.name_norm.is_some());
        }
    }

    #[test]
    fn test_random_batch_size() {
        assert_eq!(random_batch(0).len(), 0);
        assert_eq!(random_batch(7).len(), 7);
    }

    #[test]
    fn test_demo_properties() {
        let demos = demo_properties();

        assert_eq!(demos.len(), 3);
        assert_eq!(demos[0].id_owner, "own-001");
        assert_eq!(demos[1].price_property, 890_000_000.0);
        assert_eq!(demos[2].name_norm.as_deref(), Some("loft chico"));
        assert_eq!(demos[2].image, "https://picsum.photos/seed/3/600/400");
    }
}
