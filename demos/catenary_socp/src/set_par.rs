use kensui::prelude::SolverParam;
use std::fmt::Display;
use std::str::FromStr;

fn from_env<T: FromStr + Display>(name: &str) -> Option<T>
{
    let val: T = std::env::var(name).ok()?.parse().ok()?;

    log::info!("{} = {}", name, val);
    Some(val)
}

/// Overrides solver parameters set in the environment.
pub fn set_par_by_env(p: &mut SolverParam<f64>)
{
    if let Some(v) = from_env("MAX_ITER") {
        p.max_iter = Some(v);
    }
    if let Some(v) = from_env("EPS_ACC") {
        p.eps_acc = v;
    }
    if let Some(v) = from_env("EPS_INF") {
        p.eps_inf = v;
    }
    if let Some(v) = from_env("EPS_ZERO") {
        p.eps_zero = v;
    }
    if let Some(v) = from_env("LOG_PERIOD") {
        p.log_period = v;
    }
}
