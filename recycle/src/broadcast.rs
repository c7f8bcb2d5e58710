use crate::args::{BoundArguments, CallArguments};
use crate::error::RecycleError;
use crate::params::ParameterSpec;
use crate::set::BroadcastSet;
use tracing::{debug, trace};

/// Knobs for a [`Broadcaster`]. The default imposes no limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BroadcastOptions {
    /// Upper bound on the common length L.
    pub max_len: Option<usize>,
}

impl BroadcastOptions {
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

/// Recycles the arguments of a call to a common length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Broadcaster {
    options: BroadcastOptions,
}

impl Broadcaster {
    pub fn new(options: BroadcastOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BroadcastOptions {
        &self.options
    }

    pub fn broadcast(
        &self,
        spec: &ParameterSpec,
        args: &CallArguments,
    ) -> Result<BroadcastSet, RecycleError> {
        let bound = args.bind(spec)?;
        self.broadcast_bound(spec, &bound)
    }

    /// Recycles already bound arguments.
    ///
    /// L is the largest element count among the supplied arguments, or 1 when
    /// nothing longer than a scalar is supplied. A zero-length argument forces
    /// L = 0. Every supplied count must be 1 or L. Defaults of unsupplied
    /// parameters are replicated like scalars.
    pub fn broadcast_bound(
        &self,
        spec: &ParameterSpec,
        bound: &BoundArguments,
    ) -> Result<BroadcastSet, RecycleError> {
        for param in spec.iter() {
            if !param.has_default() && bound.get(&param.name).is_none() {
                return Err(RecycleError::MissingArgument(param.name.clone()));
            }
        }

        let len = common_length(bound)?;
        if let Some(max) = self.options.max_len {
            if len > max {
                return Err(RecycleError::LengthLimitExceeded { len, max });
            }
        }
        debug!(len, params = spec.len(), supplied = bound.len(), "broadcasting call");

        let mut columns = Vec::with_capacity(spec.len());
        for param in spec.iter() {
            let values = match (bound.get(&param.name), &param.default) {
                (Some(arg), _) => {
                    trace!(name = %param.name, count = arg.element_count(), len, "recycling argument");
                    arg.recycle(&param.name, len)?
                }
                (None, Some(default)) => {
                    trace!(name = %param.name, len, "recycling default");
                    vec![default.clone(); len]
                }
                (None, None) => return Err(RecycleError::MissingArgument(param.name.clone())),
            };
            columns.push((param.name.clone(), values));
        }

        Ok(BroadcastSet::new(len, columns))
    }
}

fn common_length(bound: &BoundArguments) -> Result<usize, RecycleError> {
    let counts: Vec<usize> = bound.iter().map(|(_, arg)| arg.element_count()).collect();
    let len = if counts.contains(&0) {
        0
    } else {
        counts.iter().copied().max().unwrap_or(1)
    };

    for (name, arg) in bound.iter() {
        let count = arg.element_count();
        if count != 1 && count != len {
            return Err(RecycleError::IncompatibleLength {
                name: name.to_owned(),
                len: count,
                expected: len,
            });
        }
    }
    Ok(len)
}

/// Recycles `args` against `spec` with default options.
pub fn broadcast(spec: &ParameterSpec, args: &CallArguments) -> Result<BroadcastSet, RecycleError> {
    Broadcaster::default().broadcast(spec, args)
}
