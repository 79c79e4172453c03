//! Process units, transport elements, and pumping for the Mashflow process line.
//!
//! The line runs fermentation → filtration → distillation → dehydration over
//! the four-component mixture defined in `mashflow-core`, with pipes, bends,
//! valves, and a pump moving the stream between units. Unit operations
//! transform mass; transport elements conserve it while dissipating (or, for
//! the pump, adding) mechanical energy.

pub mod balance;
pub mod process;
pub mod transport;

pub use balance::{
    BalanceError, Dehydration, Distillation, Fermentation, Filtration, MassBalance,
};
pub use process::{
    FlowInput, MassInput, MassOutput, OutputForm, Process, ProcessError, Recording, Series,
    StreamLog,
};
pub use transport::{
    Bend, BendConfig, FlowConditions, Pipe, PipeConfig, Pump, PumpConfig, PumpOutput, Transport,
    TransportError, Valve, ValveConfig,
};
