pub mod entities;
pub mod value_objects;

pub use entities::{
    AppConfig, GeneralConfig, HistoryConfig, PartialAppConfig, PartialGeneralConfig,
    PartialHistoryConfig, PartialPlannerConfig, PlannerConfig,
};
pub use value_objects::ColorMode;
