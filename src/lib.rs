//! Size Fit Library
//!
//! 採寸データとサイズ表の照合、フィット感評価、注文シート生成

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod matcher;
pub mod measure;
pub mod report;
pub mod scale;
pub mod state;
pub mod table;

pub use catalog::{MeasurementDef, ProductLine, required_codes};
pub use error::{Result, SizeFitError};
pub use export::OrderSheet;
pub use matcher::{MatchOutcome, PRIMARY_DIMENSION, match_size};
pub use scale::{FitCategory, FitScale, fit_position};
pub use state::Session;
pub use table::{DimensionRange, SizeRow, SizeTable};
