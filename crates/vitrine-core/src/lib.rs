pub mod categories;
pub mod config;
pub mod discount;
pub mod filter_state;
pub mod product;
pub mod records;

pub use categories::{category_name, UNCATEGORIZED_ID, UNCATEGORIZED_NAME};
pub use config::{load_store_config, load_store_config_from_env, ConfigError, StoreConfig};
pub use discount::{discounted_price, DEFAULT_FLASH_SALE_DISCOUNT_PCT};
pub use filter_state::{FilterState, PriceRange};
pub use product::Product;
pub use records::{CartItem, LoyaltyAccount, LoyaltyTier, Notification, Order, OrderStatus};
