mod aircraft;
mod centrogram;
mod index;
mod load;
mod loader;

pub use aircraft::{
    AircraftConfig, AircraftInfo, AircraftSource, AircraftType, WeightAndBalanceInfo,
};
pub use centrogram::{CentrogramAxis, CentrogramPoint};
pub use index::AircraftIndex;
pub use load::{FixedMassLoad, LiquidVolumeLoad, LoadDefinition, Quantity, SliderRange};
pub use loader::{RawAircraftConfig, RawCentrogramPoint, RawConstants, RawLiquid, RawLoad};
