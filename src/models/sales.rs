use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sales medium for a recorded sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    Store,
    Online,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Store, Channel::Online];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Store" => Some(Channel::Store),
            "Online" => Some(Channel::Online),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Channel::Store => "Store",
            Channel::Online => "Online",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Geographic sales territory.
///
/// `ALL` lists regions alphabetically; this is also the deterministic
/// grouping and tie-break order used by the analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Central,
    North,
    South,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Central, Region::North, Region::South];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Central" => Some(Region::Central),
            "North" => Some(Region::North),
            "South" => Some(Region::South),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Region::Central => "Central",
            Region::North => "North",
            Region::South => "South",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// The six coffee products, in the fixed column order of the dataset.
///
/// `ALL` is the canonical order for column layout, totals, and the
/// first-occurrence tie-break in top-product ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    Robusta,
    Arabica,
    Espresso,
    Lungo,
    Latte,
    Cappuccino,
}

impl Product {
    pub const ALL: [Product; 6] = [
        Product::Robusta,
        Product::Arabica,
        Product::Espresso,
        Product::Lungo,
        Product::Latte,
        Product::Cappuccino,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            Product::Robusta => "Robusta",
            Product::Arabica => "Arabica",
            Product::Espresso => "Espresso",
            Product::Lungo => "Lungo",
            Product::Latte => "Latte",
            Product::Cappuccino => "Cappuccino",
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// One sales observation: channel, region, and a quantity per product.
///
/// `None` in any field represents a missing cell in the source file. A
/// present value outside the closed channel/region sets is rejected at
/// load time and never reaches this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SalesRecord {
    pub channel: Option<Channel>,
    pub region: Option<Region>,

    #[validate(range(min = 0.0))]
    pub robusta: Option<f64>,

    #[validate(range(min = 0.0))]
    pub arabica: Option<f64>,

    #[validate(range(min = 0.0))]
    pub espresso: Option<f64>,

    #[validate(range(min = 0.0))]
    pub lungo: Option<f64>,

    #[validate(range(min = 0.0))]
    pub latte: Option<f64>,

    #[validate(range(min = 0.0))]
    pub cappuccino: Option<f64>,
}

impl SalesRecord {
    pub fn new(
        channel: Option<Channel>,
        region: Option<Region>,
        quantities: [Option<f64>; 6],
    ) -> Self {
        let [robusta, arabica, espresso, lungo, latte, cappuccino] = quantities;
        Self {
            channel,
            region,
            robusta,
            arabica,
            espresso,
            lungo,
            latte,
            cappuccino,
        }
    }

    /// Quantity sold of a given product, `None` if the cell was missing.
    pub fn quantity(&self, product: Product) -> Option<f64> {
        match product {
            Product::Robusta => self.robusta,
            Product::Arabica => self.arabica,
            Product::Espresso => self.espresso,
            Product::Lungo => self.lungo,
            Product::Latte => self.latte,
            Product::Cappuccino => self.cappuccino,
        }
    }

    /// Sum of the present product quantities.
    pub fn total(&self) -> f64 {
        Product::ALL
            .iter()
            .filter_map(|p| self.quantity(*p))
            .sum()
    }

    /// True when every cell of the record is present.
    pub fn is_complete(&self) -> bool {
        self.channel.is_some()
            && self.region.is_some()
            && Product::ALL.iter().all(|p| self.quantity(*p).is_some())
    }
}
