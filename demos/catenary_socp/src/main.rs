use kensui::prelude::*;
use kensui::*;

use std::str::FromStr;

use plotters::prelude::*;
use anyhow::Result;

mod set_par;
use set_par::set_par_by_env;

type La = FloatGeneric<f64>;
type ASolver = Solver<La>;
type AProbCatenary = ProbCatenary<La>;

/// main
fn main() -> Result<()> {
    env_logger::init();

    //----- parameters

    let begin = (0., 0.);
    let end = (1., 0.);
    let mut length = 2.0;

    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 {
        if let Ok(l) = f64::from_str(&args[1]) {
            length = l; // chain length can be specified by 1st argument
        }
    }

    //----- solve a discretized chain

    let mut curves = Vec::new();

    let chain = Chain::new(begin, end, 51, length)?;
    let s = ASolver::new().par(|p| {
        p.eps_acc = 1e-4;
        set_par_by_env(p);
    });
    let (x, y) = solve_catenary(s, &chain)?;
    curves.push((chain.nodes(), x, y));

    //----- solve a finer chain through the matrix-free operators

    let chain = Chain::new(begin, end, 101, length)?;
    let s = ASolver::new().par(|p| {
        p.eps_acc = 1e-3;
        p.max_iter = Some(1_000_000);
        set_par_by_env(p);
    });
    let mut prob = AProbCatenary::new(&chain);
    let rslt = s.solve(prob.problem())?;
    let (x, y) = rslt.0.split_at(chain.nodes());
    curves.push((chain.nodes(), x.to_vec(), y.to_vec()));

    for (n, x, y) in &curves {
        let mut k = 0;
        for i in 0..*n {
            if y[i] < y[k] {
                k = i;
            }
        }
        log::info!("n = {}: lowest node at ({:.4}, {:.4})", n, x[k], y[k]);
    }

    //----- graph plot

    let mut y_lo = begin.1.min(end.1);
    for (_, _, y) in &curves {
        for &yk in y {
            y_lo = y_lo.min(yk);
        }
    }
    let y_hi = begin.1.max(end.1);
    let x_lo = begin.0.min(end.0);
    let x_hi = begin.0.max(end.0);
    let mx = (x_hi - x_lo) * 0.1;
    let my = ((y_hi - y_lo) * 0.1).max(0.1);

    let root = SVGBackend::new("plot.svg", (480, 360)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(
            (x_lo - mx)..(x_hi + mx),
            (y_lo - my)..(y_hi + my)
        )?;

    chart.configure_mesh()
        .x_labels(6)
        .y_labels(6)
        .disable_mesh()
        .draw()?;

    // the continuous curve the discretizations approach
    if let Some(cf) = ClosedForm::fit(&chain) {
        chart.draw_series(LineSeries::new(
            (0..=256).map(|i| {
                let x = x_lo + (x_hi - x_lo) * i as f64 / 256.;
                (x, cf.y(x))
            }),
            RGBColor(223, 223, 223).stroke_width(4)
        ))?;
    }

    for (i, (n, x, y)) in curves.iter().enumerate() {
        chart.draw_series(LineSeries::new(
            x.iter().zip(y.iter()).map(|(&x, &y)| (x, y)),
            Palette99::pick(i).stroke_width(2)
        ))?;
        if *n <= 51 {
            chart.draw_series(
                x.iter().zip(y.iter()).map(|(&x, &y)| Circle::new((x, y), 2, Palette99::pick(i).filled()))
            )?;
        }
    }

    Ok(())
}
