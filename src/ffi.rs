use crate::algorithm::{AllPairsShortestPaths, FloydWarshall};
use crate::graph::EdgeBatch;
use crate::Error;
use libc::c_int;

pub const APSP_OK: c_int = 0;
pub const APSP_NO_PATH: c_int = 1;
pub const APSP_CYCLE_DETECTED: c_int = 2;
pub const APSP_ERROR: c_int = -1;

/// Edges collected through the C API, then the relaxed engine
pub struct FfiApsp {
    batch: EdgeBatch<usize, f64>,
    engine: Option<FloydWarshall<usize, f64>>,
}

#[repr(C)]
pub struct FfiPath {
    pub vertices: *mut usize,
    pub len: usize,
}

#[no_mangle]
pub extern "C" fn apsp_new() -> *mut FfiApsp {
    Box::into_raw(Box::new(FfiApsp {
        batch: EdgeBatch::new(),
        engine: None,
    }))
}

/// Declares a vertex label. Fails once the matrix has been generated.
#[no_mangle]
pub extern "C" fn apsp_add_vertex(g: *mut FfiApsp, label: usize) -> bool {
    let Some(g) = (unsafe { g.as_mut() }) else {
        return false;
    };
    if g.engine.is_some() {
        return false;
    }
    g.batch.push_vertex(label);
    true
}

/// Adds an edge between two labels. Fails once the matrix has been generated.
#[no_mangle]
pub extern "C" fn apsp_add_edge(g: *mut FfiApsp, from: usize, to: usize, weight: f64) -> bool {
    let Some(g) = (unsafe { g.as_mut() }) else {
        return false;
    };
    if g.engine.is_some() {
        return false;
    }
    g.batch.push_edge(from, to, weight);
    true
}

/// Builds and relaxes the matrices; later calls are no-ops
#[no_mangle]
pub extern "C" fn apsp_generate(g: *mut FfiApsp) -> bool {
    let Some(g) = (unsafe { g.as_mut() }) else {
        return false;
    };
    if g.engine.is_some() {
        return true;
    }

    match FloydWarshall::from_ingestor(std::mem::take(&mut g.batch)) {
        Ok(mut engine) => {
            engine.generate_distance_matrix();
            g.engine = Some(engine);
            true
        }
        Err(err) => {
            log::warn!("apsp_generate failed: {}", err);
            false
        }
    }
}

/// Distance between two labels: `INFINITY` when unreachable, `NAN` on error
#[no_mangle]
pub extern "C" fn apsp_distance(g: *const FfiApsp, from: usize, to: usize) -> f64 {
    let Some(engine) = (unsafe { g.as_ref() }).and_then(|g| g.engine.as_ref()) else {
        return f64::NAN;
    };
    match engine.distance(&from, &to) {
        Ok(Some(distance)) => distance,
        Ok(None) => f64::INFINITY,
        Err(_) => f64::NAN,
    }
}

/// Writes the path between two labels into `out`.
///
/// Returns `APSP_OK` and fills `out` on success; `out` must then be released
/// with [`apsp_path_free`]. Otherwise `out` is left empty.
#[no_mangle]
pub extern "C" fn apsp_path(g: *const FfiApsp, from: usize, to: usize, out: *mut FfiPath) -> c_int {
    let Some(out) = (unsafe { out.as_mut() }) else {
        return APSP_ERROR;
    };
    out.vertices = std::ptr::null_mut();
    out.len = 0;

    let Some(engine) = (unsafe { g.as_ref() }).and_then(|g| g.engine.as_ref()) else {
        return APSP_ERROR;
    };
    let (Some(source), Some(target)) = (engine.vertex_index().id(&from), engine.vertex_index().id(&to)) else {
        return APSP_ERROR;
    };

    match engine.path_by_id(source, target) {
        Ok(Some(path)) => {
            let labels: Vec<usize> = path
                .vertices
                .iter()
                .filter_map(|&id| engine.vertex_index().label(id).copied())
                .collect();
            let boxed = labels.into_boxed_slice();
            out.len = boxed.len();
            out.vertices = Box::into_raw(boxed) as *mut usize;
            APSP_OK
        }
        Ok(None) => APSP_NO_PATH,
        Err(Error::CycleDetected { .. }) => APSP_CYCLE_DETECTED,
        Err(_) => APSP_ERROR,
    }
}

#[no_mangle]
pub extern "C" fn apsp_path_free(path: *mut FfiPath) {
    let Some(path) = (unsafe { path.as_mut() }) else {
        return;
    };
    if !path.vertices.is_null() {
        unsafe {
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(path.vertices, path.len)));
        }
    }
    path.vertices = std::ptr::null_mut();
    path.len = 0;
}

#[no_mangle]
pub extern "C" fn apsp_free(g: *mut FfiApsp) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}
