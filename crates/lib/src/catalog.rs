//! # Selector Catalog
//!
//! The fixed choices offered by the forecast selectors: crops, provinces grouped
//! by geographic region, weather scenarios and forecast years, each with a
//! Vietnamese and an English display name.

use crate::types::{Locale, UiScenario};
use serde::Serialize;

/// The years the forecast selector offers.
pub const FORECAST_YEARS: [i32; 5] = [2026, 2027, 2028, 2029, 2030];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crop {
    pub id: &'static str,
    pub name_vi: &'static str,
    pub name_en: &'static str,
}

impl Crop {
    const fn new(id: &'static str, name_vi: &'static str, name_en: &'static str) -> Self {
        Self {
            id,
            name_vi,
            name_en,
        }
    }

    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Vi => self.name_vi,
            Locale::En => self.name_en,
        }
    }
}

/// The eight geographic regions the provinces are grouped by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionGroup {
    Northeast,
    Northwest,
    RedRiverDelta,
    NorthCentralCoast,
    SouthCentralCoast,
    CentralHighlands,
    Southeast,
    MekongDelta,
}

impl RegionGroup {
    pub fn name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (RegionGroup::Northeast, Locale::Vi) => "Đông Bắc Bộ",
            (RegionGroup::Northeast, Locale::En) => "Northeast",
            (RegionGroup::Northwest, Locale::Vi) => "Tây Bắc Bộ",
            (RegionGroup::Northwest, Locale::En) => "Northwest",
            (RegionGroup::RedRiverDelta, Locale::Vi) => "Đồng bằng sông Hồng",
            (RegionGroup::RedRiverDelta, Locale::En) => "Red River Delta",
            (RegionGroup::NorthCentralCoast, Locale::Vi) => "Bắc Trung Bộ",
            (RegionGroup::NorthCentralCoast, Locale::En) => "North Central Coast",
            (RegionGroup::SouthCentralCoast, Locale::Vi) => "Duyên hải Nam Trung Bộ",
            (RegionGroup::SouthCentralCoast, Locale::En) => "South Central Coast",
            (RegionGroup::CentralHighlands, Locale::Vi) => "Tây Nguyên",
            (RegionGroup::CentralHighlands, Locale::En) => "Central Highlands",
            (RegionGroup::Southeast, Locale::Vi) => "Đông Nam Bộ",
            (RegionGroup::Southeast, Locale::En) => "Southeast",
            (RegionGroup::MekongDelta, Locale::Vi) => "Đồng bằng sông Cửu Long",
            (RegionGroup::MekongDelta, Locale::En) => "Mekong Delta",
        }
    }
}

/// A province.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub name_vi: &'static str,
    pub name_en: &'static str,
    pub group: RegionGroup,
}

impl Region {
    const fn new(
        id: &'static str,
        name_vi: &'static str,
        name_en: &'static str,
        group: RegionGroup,
    ) -> Self {
        Self {
            id,
            name_vi,
            name_en,
            group,
        }
    }

    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Vi => self.name_vi,
            Locale::En => self.name_en,
        }
    }
}

pub const CROPS: &[Crop] = &[
    Crop::new("coffee", "Cà phê", "Coffee"),
    Crop::new("rice", "Lúa gạo", "Rice"),
    Crop::new("rubber", "Cao su", "Rubber"),
    Crop::new("pepper", "Hồ tiêu", "Black Pepper"),
    Crop::new("cashew", "Điều", "Cashew"),
    Crop::new("tea", "Chè", "Tea"),
    Crop::new("corn", "Ngô", "Corn"),
    Crop::new("cassava", "Sắn", "Cassava"),
    Crop::new("sugarcane", "Mía", "Sugarcane"),
    Crop::new("coconut", "Dừa", "Coconut"),
    Crop::new("dragon-fruit", "Thanh long", "Dragon Fruit"),
    Crop::new("durian", "Sầu riêng", "Durian"),
    Crop::new("mango", "Xoài", "Mango"),
    Crop::new("longan", "Nhãn", "Longan"),
    Crop::new("lychee", "Vải", "Lychee"),
    Crop::new("peanut", "Lạc (Đậu phộng)", "Peanut"),
    Crop::new("soybean", "Đậu nành", "Soybean"),
    Crop::new("vegetable", "Rau màu", "Vegetables"),
    Crop::new("cocoa", "Ca cao", "Cocoa"),
    Crop::new("macadamia", "Mắc ca", "Macadamia"),
];

pub const REGIONS: &[Region] = &[
    Region::new("ha-giang", "Hà Giang", "Ha Giang", RegionGroup::Northeast),
    Region::new("cao-bang", "Cao Bằng", "Cao Bang", RegionGroup::Northeast),
    Region::new("bac-kan", "Bắc Kạn", "Bac Kan", RegionGroup::Northeast),
    Region::new("tuyen-quang", "Tuyên Quang", "Tuyen Quang", RegionGroup::Northeast),
    Region::new("lang-son", "Lạng Sơn", "Lang Son", RegionGroup::Northeast),
    Region::new("thai-nguyen", "Thái Nguyên", "Thai Nguyen", RegionGroup::Northeast),
    Region::new("bac-giang", "Bắc Giang", "Bac Giang", RegionGroup::Northeast),
    Region::new("quang-ninh", "Quảng Ninh", "Quang Ninh", RegionGroup::Northeast),
    Region::new("lai-chau", "Lai Châu", "Lai Chau", RegionGroup::Northwest),
    Region::new("dien-bien", "Điện Biên", "Dien Bien", RegionGroup::Northwest),
    Region::new("son-la", "Sơn La", "Son La", RegionGroup::Northwest),
    Region::new("hoa-binh", "Hòa Bình", "Hoa Binh", RegionGroup::Northwest),
    Region::new("lao-cai", "Lào Cai", "Lao Cai", RegionGroup::Northwest),
    Region::new("yen-bai", "Yên Bái", "Yen Bai", RegionGroup::Northwest),
    Region::new("phu-tho", "Phú Thọ", "Phu Tho", RegionGroup::Northwest),
    Region::new("ha-noi", "Hà Nội", "Hanoi", RegionGroup::RedRiverDelta),
    Region::new("vinh-phuc", "Vĩnh Phúc", "Vinh Phuc", RegionGroup::RedRiverDelta),
    Region::new("bac-ninh", "Bắc Ninh", "Bac Ninh", RegionGroup::RedRiverDelta),
    Region::new("hai-duong", "Hải Dương", "Hai Duong", RegionGroup::RedRiverDelta),
    Region::new("hai-phong", "Hải Phòng", "Hai Phong", RegionGroup::RedRiverDelta),
    Region::new("hung-yen", "Hưng Yên", "Hung Yen", RegionGroup::RedRiverDelta),
    Region::new("thai-binh", "Thái Bình", "Thai Binh", RegionGroup::RedRiverDelta),
    Region::new("ha-nam", "Hà Nam", "Ha Nam", RegionGroup::RedRiverDelta),
    Region::new("nam-dinh", "Nam Định", "Nam Dinh", RegionGroup::RedRiverDelta),
    Region::new("ninh-binh", "Ninh Bình", "Ninh Binh", RegionGroup::RedRiverDelta),
    Region::new("thanh-hoa", "Thanh Hóa", "Thanh Hoa", RegionGroup::NorthCentralCoast),
    Region::new("nghe-an", "Nghệ An", "Nghe An", RegionGroup::NorthCentralCoast),
    Region::new("ha-tinh", "Hà Tĩnh", "Ha Tinh", RegionGroup::NorthCentralCoast),
    Region::new("quang-binh", "Quảng Bình", "Quang Binh", RegionGroup::NorthCentralCoast),
    Region::new("quang-tri", "Quảng Trị", "Quang Tri", RegionGroup::NorthCentralCoast),
    Region::new("thua-thien-hue", "Thừa Thiên Huế", "Thua Thien Hue", RegionGroup::NorthCentralCoast),
    Region::new("da-nang", "Đà Nẵng", "Da Nang", RegionGroup::SouthCentralCoast),
    Region::new("quang-nam", "Quảng Nam", "Quang Nam", RegionGroup::SouthCentralCoast),
    Region::new("quang-ngai", "Quảng Ngãi", "Quang Ngai", RegionGroup::SouthCentralCoast),
    Region::new("binh-dinh", "Bình Định", "Binh Dinh", RegionGroup::SouthCentralCoast),
    Region::new("phu-yen", "Phú Yên", "Phu Yen", RegionGroup::SouthCentralCoast),
    Region::new("khanh-hoa", "Khánh Hòa", "Khanh Hoa", RegionGroup::SouthCentralCoast),
    Region::new("ninh-thuan", "Ninh Thuận", "Ninh Thuan", RegionGroup::SouthCentralCoast),
    Region::new("binh-thuan", "Bình Thuận", "Binh Thuan", RegionGroup::SouthCentralCoast),
    Region::new("kon-tum", "Kon Tum", "Kon Tum", RegionGroup::CentralHighlands),
    Region::new("gia-lai", "Gia Lai", "Gia Lai", RegionGroup::CentralHighlands),
    Region::new("dak-lak", "Đắk Lắk", "Dak Lak", RegionGroup::CentralHighlands),
    Region::new("dak-nong", "Đắk Nông", "Dak Nong", RegionGroup::CentralHighlands),
    Region::new("lam-dong", "Lâm Đồng", "Lam Dong", RegionGroup::CentralHighlands),
    Region::new("binh-phuoc", "Bình Phước", "Binh Phuoc", RegionGroup::Southeast),
    Region::new("tay-ninh", "Tây Ninh", "Tay Ninh", RegionGroup::Southeast),
    Region::new("binh-duong", "Bình Dương", "Binh Duong", RegionGroup::Southeast),
    Region::new("dong-nai", "Đồng Nai", "Dong Nai", RegionGroup::Southeast),
    Region::new("ba-ria-vung-tau", "Bà Rịa - Vũng Tàu", "Ba Ria - Vung Tau", RegionGroup::Southeast),
    Region::new("ho-chi-minh", "TP. Hồ Chí Minh", "Ho Chi Minh City", RegionGroup::Southeast),
    Region::new("long-an", "Long An", "Long An", RegionGroup::MekongDelta),
    Region::new("tien-giang", "Tiền Giang", "Tien Giang", RegionGroup::MekongDelta),
    Region::new("ben-tre", "Bến Tre", "Ben Tre", RegionGroup::MekongDelta),
    Region::new("tra-vinh", "Trà Vinh", "Tra Vinh", RegionGroup::MekongDelta),
    Region::new("vinh-long", "Vĩnh Long", "Vinh Long", RegionGroup::MekongDelta),
    Region::new("dong-thap", "Đồng Tháp", "Dong Thap", RegionGroup::MekongDelta),
    Region::new("an-giang", "An Giang", "An Giang", RegionGroup::MekongDelta),
    Region::new("kien-giang", "Kiên Giang", "Kien Giang", RegionGroup::MekongDelta),
    Region::new("can-tho", "Cần Thơ", "Can Tho", RegionGroup::MekongDelta),
    Region::new("hau-giang", "Hậu Giang", "Hau Giang", RegionGroup::MekongDelta),
    Region::new("soc-trang", "Sóc Trăng", "Soc Trang", RegionGroup::MekongDelta),
    Region::new("bac-lieu", "Bạc Liêu", "Bac Lieu", RegionGroup::MekongDelta),
    Region::new("ca-mau", "Cà Mau", "Ca Mau", RegionGroup::MekongDelta),
];

pub fn find_crop(id: &str) -> Option<&'static Crop> {
    CROPS.iter().find(|c| c.id == id)
}

pub fn find_region(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}

/// The province name the prediction endpoint expects for a region id.
///
/// The backend is keyed by Vietnamese province names. Ids the catalog does not
/// know are passed through unchanged.
pub fn province_name(region_id: &str) -> String {
    find_region(region_id)
        .map(|r| r.name_vi.to_string())
        .unwrap_or_else(|| region_id.to_string())
}

impl UiScenario {
    pub fn name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (UiScenario::Baseline, Locale::Vi) => "Bình thường",
            (UiScenario::Baseline, Locale::En) => "Normal",
            (UiScenario::Favorable, Locale::Vi) => "Thuận lợi",
            (UiScenario::Favorable, Locale::En) => "Favorable",
            (UiScenario::ElNino, _) => "El Niño",
            (UiScenario::LaNina, _) => "La Niña",
            (UiScenario::Drought, Locale::Vi) => "Hạn hán nặng",
            (UiScenario::Drought, Locale::En) => "Severe Drought",
            (UiScenario::Storm, Locale::Vi) => "Bão lớn",
            (UiScenario::Storm, Locale::En) => "Major Storm",
        }
    }

    pub fn description(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (UiScenario::Baseline, Locale::Vi) => "Thời tiết diễn biến như trung bình nhiều năm",
            (UiScenario::Baseline, Locale::En) => "Weather follows historical averages",
            (UiScenario::Favorable, Locale::Vi) => "Mưa thuận gió hòa, ít sâu bệnh",
            (UiScenario::Favorable, Locale::En) => "Good rainfall, minimal pests",
            (UiScenario::ElNino, Locale::Vi) => "Hạn hán, nắng nóng kéo dài",
            (UiScenario::ElNino, Locale::En) => "Drought, prolonged heat waves",
            (UiScenario::LaNina, Locale::Vi) => "Mưa nhiều, lũ lụt, ngập úng",
            (UiScenario::LaNina, Locale::En) => "Heavy rain, flooding, waterlogging",
            (UiScenario::Drought, Locale::Vi) => "Thiếu nước nghiêm trọng, mất mùa",
            (UiScenario::Drought, Locale::En) => "Serious water shortage, crop failure",
            (UiScenario::Storm, Locale::Vi) => "Ảnh hưởng bão, gió mạnh, mưa to",
            (UiScenario::Storm, Locale::En) => "Typhoon impact, strong winds, heavy rain",
        }
    }
}

// --- Localized listings ---

#[derive(Clone, Debug, Serialize)]
pub struct CropEntry {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegionEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub group: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct ScenarioEntry {
    pub id: &'static str,
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Every selector option rendered in one language.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogListing {
    pub crops: Vec<CropEntry>,
    pub regions: Vec<RegionEntry>,
    pub scenarios: Vec<ScenarioEntry>,
    pub years: Vec<i32>,
}

pub fn listing(locale: Locale) -> CatalogListing {
    CatalogListing {
        crops: CROPS
            .iter()
            .map(|c| CropEntry {
                id: c.id,
                name: c.name(locale),
            })
            .collect(),
        regions: REGIONS
            .iter()
            .map(|r| RegionEntry {
                id: r.id,
                name: r.name(locale),
                group: r.group.name(locale),
            })
            .collect(),
        scenarios: UiScenario::ALL
            .iter()
            .map(|s| ScenarioEntry {
                id: s.id(),
                key: s.key().as_str(),
                name: s.name(locale),
                description: s.description(locale),
            })
            .collect(),
        years: FORECAST_YEARS.to_vec(),
    }
}
