//! The processing engine wrapping a unit-operation mass balance.
//!
//! A [`Process`] owns a named unit, normalizes whatever representation the
//! caller supplies down to absolute mass rates, applies the unit's balance,
//! and re-composes the result in the requested output form. On request it
//! also records the streams it sees into its append-only [`StreamLog`] pair.
//!
//! [`Process::process_flow`] is a thin adapter over the mass-domain path: it
//! converts volume-basis input through the core conversions and defers to
//! [`Process::process_mass`], so the mass-domain path stays the single
//! source of truth for the transformation.

mod log;

use thiserror::Error;
use uom::si::f64::{MassRate, VolumeRate};

use mashflow_core::{
    CompositionError, Fraction, FractionError, MassFlows, Mixture, VolumeFlows,
    constraint::{Constraint, ConstraintError, NonNegative},
};

use crate::balance::{BalanceError, MassBalance};

pub use log::{Series, StreamLog};

/// A mass-basis input stream in any supported representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MassInput {
    /// Per-component mass rates; `None` marks a component left undefined by
    /// an upstream unit.
    Amount(Mixture<Option<MassRate>>),
    /// A composition with its accompanying total mass rate.
    Composition {
        fractions: Mixture<Fraction>,
        total: MassRate,
    },
    /// Both halves supplied directly, skipping re-derivation when recording.
    Full {
        amounts: MassFlows,
        composition: Mixture<Fraction>,
    },
}

/// A volume-basis input stream in any supported representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowInput {
    /// Per-component volumetric flow rates.
    Amount(Mixture<VolumeRate>),
    /// A composition with its accompanying total volumetric flow.
    Composition {
        fractions: Mixture<Fraction>,
        total: VolumeRate,
    },
}

/// The representation requested for a processing result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputForm {
    /// Per-component mass rates, preserving undefined components.
    Amount,
    /// The normalized outlet composition.
    Composition,
    /// Both amounts and composition.
    Full,
}

/// Which sides of a processing call to record into the owning unit's logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recording {
    pub inputs: bool,
    pub outputs: bool,
}

impl Recording {
    /// Record neither side.
    pub const OFF: Self = Self {
        inputs: false,
        outputs: false,
    };

    /// Record both sides.
    pub const ALL: Self = Self {
        inputs: true,
        outputs: true,
    };
}

/// A processing result, shaped by the requested [`OutputForm`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MassOutput {
    /// Per-component mass rates; components undefined upstream stay `None`.
    Amount(Mixture<Option<MassRate>>),
    /// The normalized outlet composition.
    Composition(Mixture<Fraction>),
    /// Both amounts and composition.
    Full {
        amounts: MassFlows,
        composition: Mixture<Fraction>,
    },
}

/// Errors that may occur when processing a stream through a unit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProcessError {
    /// Output recording needs both halves of the result, so the full output
    /// form must be requested alongside it.
    #[error("recording outputs requires the full output form")]
    RecordingRequiresFull,

    /// An input with undefined components has no derivable composition.
    #[error("cannot record an input with undefined components")]
    UndefinedInput,

    /// A zero-mass input has no derivable composition to record.
    #[error("cannot record an input with zero total mass")]
    ZeroInputMass,

    /// A composition was requested but the balance left components undefined.
    #[error("output composition is undefined when a component is undefined")]
    UndefinedOutput,

    /// A composition was requested for a zero-mass output.
    #[error("output composition is undefined for a zero-mass stream")]
    ZeroOutputMass,

    /// The unit's balance failed.
    #[error(transparent)]
    Balance(#[from] BalanceError),

    /// An input value violated a numeric invariant.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// A derived fraction fell outside `[0, 1]`.
    #[error(transparent)]
    Fraction(#[from] FractionError),
}

/// A named unit operation together with its stream logs.
///
/// The process records copies of the streams it sees; it never owns or
/// shares them. Its logs are the only mutable state, appended to only by
/// this instance through `&mut self`; a failing call appends nothing.
#[derive(Debug, Clone)]
pub struct Process<U> {
    name: String,
    unit: U,
    input_log: StreamLog,
    output_log: StreamLog,
}

impl<U: MassBalance> Process<U> {
    /// Wraps a unit with a display name and empty logs.
    pub fn new(name: impl Into<String>, unit: U) -> Self {
        Self {
            name: name.into(),
            unit,
            input_log: StreamLog::default(),
            output_log: StreamLog::default(),
        }
    }

    /// The unit's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped unit.
    #[must_use]
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Streams recorded on the inlet side.
    #[must_use]
    pub fn input_log(&self) -> &StreamLog {
        &self.input_log
    }

    /// Streams recorded on the outlet side.
    #[must_use]
    pub fn output_log(&self) -> &StreamLog {
        &self.output_log
    }

    /// Processes a mass-basis stream through the unit.
    ///
    /// The input is normalized to absolute mass rates, the unit's balance is
    /// applied, and the result is returned in the requested form. With
    /// `recording.inputs` the normalized input (amounts, composition, and
    /// total) is appended to the input log; with `recording.outputs` the
    /// re-composed output is appended to the output log. Either both sides
    /// of a call are fully appended or, on failure, neither is.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessError`] if a requested composition is undefined
    /// (zero-mass or partially-undefined stream), if output recording is
    /// requested without the full output form, if an input value violates a
    /// numeric invariant, or if the unit's balance fails.
    pub fn process_mass(
        &mut self,
        input: MassInput,
        output: OutputForm,
        recording: Recording,
    ) -> Result<MassOutput, ProcessError> {
        if recording.outputs && output != OutputForm::Full {
            return Err(ProcessError::RecordingRequiresFull);
        }

        let (amounts, supplied) = normalize(input)?;

        let input_entry = if recording.inputs {
            Some(input_record(amounts, supplied)?)
        } else {
            None
        };

        let raw = self.unit.balance(amounts)?;

        let (result, output_entry) = match output {
            OutputForm::Amount => (MassOutput::Amount(raw), None),
            OutputForm::Composition => {
                let (_, composition) = recompose(raw)?;
                (MassOutput::Composition(composition), None)
            }
            OutputForm::Full => {
                let (amounts, composition) = recompose(raw)?;
                (
                    MassOutput::Full {
                        amounts,
                        composition,
                    },
                    recording.outputs.then_some((amounts, composition)),
                )
            }
        };

        // Validation is complete; the appends below cannot fail.
        if let Some((flows, fractions)) = input_entry {
            self.input_log.record_mass(&flows, &fractions);
        }
        if let Some((flows, fractions)) = output_entry {
            self.output_log.record_mass(&flows, &fractions);
        }

        Ok(result)
    }

    /// Processes a volume-basis stream through the unit.
    ///
    /// The input is converted to the mass basis through the component
    /// density table and handed to [`Process::process_mass`]; the unit's
    /// balance is never invoked directly from here. With `recording.inputs`
    /// the volume-basis input is additionally appended to the input log's
    /// volume series, separately from the mass-basis entry.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessError`] under the same conditions as
    /// [`Process::process_mass`].
    pub fn process_flow(
        &mut self,
        input: FlowInput,
        output: OutputForm,
        recording: Recording,
    ) -> Result<MassOutput, ProcessError> {
        let flows = match input {
            FlowInput::Amount(rates) => VolumeFlows::new(rates)?,
            FlowInput::Composition { fractions, total } => {
                VolumeFlows::from_composition(fractions, total)?
            }
        };

        let volume_entry = if recording.inputs {
            match flows.composition() {
                Ok(fractions) => Some((flows, fractions)),
                Err(CompositionError::ZeroTotal) => return Err(ProcessError::ZeroInputMass),
                Err(CompositionError::Fraction(e)) => return Err(ProcessError::Fraction(e)),
            }
        } else {
            None
        };

        let mass = flows.to_mass();
        let result = self.process_mass(
            MassInput::Amount(mass.into_mixture().map(Some)),
            output,
            recording,
        )?;

        if let Some((flows, fractions)) = volume_entry {
            self.input_log.record_volume(&flows, &fractions);
        }

        Ok(result)
    }
}

/// Reduces any input representation to per-component mass rates, keeping a
/// caller-supplied composition for recording when one was given.
fn normalize(
    input: MassInput,
) -> Result<(Mixture<Option<MassRate>>, Option<Mixture<Fraction>>), ProcessError> {
    match input {
        MassInput::Amount(amounts) => {
            for rate in amounts.to_array().into_iter().flatten() {
                NonNegative::check(&rate)?;
            }
            Ok((amounts, None))
        }
        MassInput::Composition { fractions, total } => {
            let flows = MassFlows::from_composition(fractions, total)?;
            Ok((flows.into_mixture().map(Some), Some(fractions)))
        }
        MassInput::Full {
            amounts,
            composition,
        } => Ok((amounts.into_mixture().map(Some), Some(composition))),
    }
}

/// Builds the input-log entry for a normalized input.
fn input_record(
    amounts: Mixture<Option<MassRate>>,
    supplied: Option<Mixture<Fraction>>,
) -> Result<(MassFlows, Mixture<Fraction>), ProcessError> {
    let defined = amounts.transpose().ok_or(ProcessError::UndefinedInput)?;
    let flows = MassFlows::new(defined)?;
    let fractions = match supplied {
        Some(fractions) => fractions,
        None => match flows.composition() {
            Ok(fractions) => fractions,
            Err(CompositionError::ZeroTotal) => return Err(ProcessError::ZeroInputMass),
            Err(CompositionError::Fraction(e)) => return Err(ProcessError::Fraction(e)),
        },
    };
    Ok((flows, fractions))
}

/// Validates a raw balance result and derives its composition.
fn recompose(raw: Mixture<Option<MassRate>>) -> Result<(MassFlows, Mixture<Fraction>), ProcessError> {
    let defined = raw.transpose().ok_or(ProcessError::UndefinedOutput)?;
    let flows = MassFlows::new(defined)?;
    match flows.composition() {
        Ok(fractions) => Ok((flows, fractions)),
        Err(CompositionError::ZeroTotal) => Err(ProcessError::ZeroOutputMass),
        Err(CompositionError::Fraction(e)) => Err(ProcessError::Fraction(e)),
    }
}
