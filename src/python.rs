//! Python bindings, built with the `python` feature.
//!
//! ```python
//! import tinyext
//!
//! buf = tinyext.DataBuffer()
//! buf.set_data([3, 7.5, 2.0])
//! buf.get_max()            # 7.5
//!
//! p = tinyext.Player("ada", 2, "gold")
//! p.decrease_rank(3)       # False, rank stays 2
//! str(p)                   # 'Name: ada, Rank: 2, Tier: gold'
//! ```

use crate::data::{BufferStore, Player};
use crate::error::ExtError;
use crate::marshal::{decode_numeric, Element};
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyLong, PyString};

mod exceptions {
    #![allow(non_camel_case_types)]

    pyo3::create_exception!(tinyext, error, pyo3::exceptions::PyException);
}

pub use exceptions::error;

fn to_py_err(err: ExtError) -> PyErr {
    match err {
        ExtError::InvalidField { .. } => PyTypeError::new_err(err.to_string()),
        other => error::new_err(other.to_string()),
    }
}

fn classify(item: &PyAny) -> PyResult<Element> {
    if item.is_instance_of::<PyLong>() {
        Ok(Element::Int(item.extract()?))
    } else if item.is_instance_of::<PyFloat>() {
        Ok(Element::Float(item.extract()?))
    } else {
        Ok(Element::Other(item.get_type().name()?.to_string()))
    }
}

fn required<'p>(value: Option<&'p PyAny>, field: &'static str) -> PyResult<&'p PyAny> {
    value.ok_or_else(|| PyTypeError::new_err(format!("Cannot delete the {field}.")))
}

fn extract_text(value: &PyAny, field: &'static str) -> PyResult<String> {
    if value.is_instance_of::<PyString>() {
        value.extract()
    } else {
        Err(PyTypeError::new_err(format!("{field} must be unicode.")))
    }
}

fn extract_rank(value: &PyAny) -> PyResult<i64> {
    if value.is_instance_of::<PyLong>() {
        value.extract()
    } else {
        Err(PyTypeError::new_err("rank must be unsigned long."))
    }
}

/// Fixed-length numeric buffer.
#[pyclass(name = "DataBuffer")]
#[derive(Default)]
pub struct PyDataBuffer {
    inner: BufferStore,
}

#[pymethods]
impl PyDataBuffer {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Set input data from a sequence of ints and floats.
    fn set_data(&mut self, values: &PyAny) -> PyResult<()> {
        let elements = values
            .iter()?
            .map(|item| item.and_then(classify))
            .collect::<PyResult<Vec<_>>>()?;
        let data = decode_numeric(elements).map_err(to_py_err)?;
        self.inner.set(&data).map_err(to_py_err)
    }

    /// Get max data.
    fn get_max(&self) -> PyResult<f64> {
        self.inner.max().map_err(to_py_err)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// Player objects.
#[pyclass(name = "Player")]
#[derive(Default)]
pub struct PyPlayer {
    inner: Player,
}

#[pymethods]
impl PyPlayer {
    #[new]
    #[pyo3(signature = (name=None, rank=None, tier=None))]
    fn new(name: Option<&PyAny>, rank: Option<&PyAny>, tier: Option<&PyAny>) -> PyResult<Self> {
        let mut player = Self::default();
        if let Some(name) = name {
            player.set_name(Some(name))?;
        }
        if let Some(rank) = rank {
            player.set_rank(Some(rank))?;
        }
        if let Some(tier) = tier {
            player.set_tier(Some(tier))?;
        }
        Ok(player)
    }

    /// player name
    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[setter]
    fn set_name(&mut self, value: Option<&PyAny>) -> PyResult<()> {
        let value = required(value, "name")?;
        self.inner.set_name(extract_text(value, "name")?);
        Ok(())
    }

    /// player rank
    #[getter]
    fn rank(&self) -> u64 {
        self.inner.rank()
    }

    #[setter]
    fn set_rank(&mut self, value: Option<&PyAny>) -> PyResult<()> {
        let value = required(value, "rank")?;
        let rank = extract_rank(value)?;
        self.inner.set_rank(rank).map_err(to_py_err)
    }

    /// player tier
    #[getter]
    fn tier(&self) -> String {
        self.inner.tier().to_string()
    }

    #[setter]
    fn set_tier(&mut self, value: Option<&PyAny>) -> PyResult<()> {
        let value = required(value, "tier")?;
        self.inner.set_tier(extract_text(value, "tier")?);
        Ok(())
    }

    /// Increase rank of player. Returns False if the update was refused.
    #[pyo3(signature = (amount=1))]
    fn increase_rank(&mut self, amount: i64) -> bool {
        self.inner.increase_rank(amount).is_applied()
    }

    /// Decrease rank of player. Returns False, leaving the rank unchanged,
    /// if it would drop below 0.
    #[pyo3(signature = (amount=1))]
    fn decrease_rank(&mut self, amount: i64) -> bool {
        self.inner.decrease_rank(amount).is_applied()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// Install the tracing subscriber (reads TINYEXT_LOG_LEVEL / TINYEXT_LOG_JSON).
#[pyfunction]
fn init_logging() {
    crate::logging::init();
}

#[pymodule]
fn tinyext(py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyDataBuffer>()?;
    m.add_class::<PyPlayer>()?;
    m.add("error", py.get_type::<error>())?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
