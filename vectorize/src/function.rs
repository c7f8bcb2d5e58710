use crate::columns::Columns;
use crate::error::VectorizeError;
use ndarray::Array1;
use recycle::{BroadcastOptions, BroadcastSet, Broadcaster, CallArguments, ParameterSpec, RecycleError, Row};
use tracing::debug;

/// A scalar function body paired with its declared parameters.
///
/// Each call recycles the supplied arguments (defaults included) to a common
/// length L and runs the body once per index, so a body that branches on an
/// implicit parameter still yields L results.
pub struct Vectorized<F> {
    spec: ParameterSpec,
    broadcaster: Broadcaster,
    body: F,
}

impl<F, T> Vectorized<F>
where
    F: Fn(&Row<'_>) -> Result<T, RecycleError>,
{
    pub fn new(spec: ParameterSpec, body: F) -> Self {
        Self {
            spec,
            broadcaster: Broadcaster::default(),
            body,
        }
    }

    pub fn with_options(mut self, options: BroadcastOptions) -> Self {
        self.broadcaster = Broadcaster::new(options);
        self
    }

    pub fn spec(&self) -> &ParameterSpec {
        &self.spec
    }

    pub fn broadcast(&self, args: &CallArguments) -> Result<BroadcastSet, VectorizeError> {
        Ok(self.broadcaster.broadcast(&self.spec, args)?)
    }

    pub fn call(&self, args: &CallArguments) -> Result<Vec<T>, VectorizeError> {
        let set = self.broadcast(args)?;
        debug!(len = set.len(), "running body per element");
        set.rows()
            .map(|row| {
                (self.body)(&row).map_err(|source| VectorizeError::Element {
                    index: row.index(),
                    source,
                })
            })
            .collect()
    }

    /// Runs `columnwise` once over the whole recycled set instead of the scalar body.
    ///
    /// The output must hold exactly one value per index.
    pub fn call_columns<G>(
        &self,
        args: &CallArguments,
        columnwise: G,
    ) -> Result<Array1<f64>, VectorizeError>
    where
        G: Fn(&Columns<'_>) -> Result<Array1<f64>, RecycleError>,
    {
        let set = self.broadcast(args)?;
        debug!(len = set.len(), "running body over columns");
        let out = columnwise(&Columns::from_set(&set))?;
        if out.len() != set.len() {
            return Err(VectorizeError::OutputLength {
                len: out.len(),
                expected: set.len(),
            });
        }
        Ok(out)
    }
}

impl<F> Vectorized<F>
where
    F: Fn(&Row<'_>) -> Result<f64, RecycleError>,
{
    pub fn call_array(&self, args: &CallArguments) -> Result<Array1<f64>, VectorizeError> {
        self.call(args).map(Array1::from)
    }
}
