pub mod config;

pub use config::{
    AircraftConfig, AircraftIndex, AircraftInfo, AircraftSource, AircraftType, CentrogramAxis,
    CentrogramPoint, FixedMassLoad, LiquidVolumeLoad, LoadDefinition, Quantity, RawAircraftConfig,
    SliderRange, WeightAndBalanceInfo,
};
