pub mod aircraft;
pub mod balance;
pub mod envelope;
pub mod loads;

pub use aircraft::{
    AircraftConfig, AircraftIndex, AircraftInfo, AircraftSource, AircraftType, CentrogramAxis,
    CentrogramPoint, FixedMassLoad, LiquidVolumeLoad, LoadDefinition, Quantity, RawAircraftConfig,
    SliderRange, WeightAndBalanceInfo,
};
pub use balance::CenterOfGravity;
pub use envelope::Envelope;
pub use loads::ResolvedLoad;
