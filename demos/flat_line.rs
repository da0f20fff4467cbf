use line_params::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Flat 3-phase line, one conductor per phase, meters.
    let mut calc = LineCalculator::new();
    calc.set_line_params("ACSR", 100.0, 0.0141, 60.0);
    for (phase, x) in [("A", -5.0), ("B", 0.0), ("C", 5.0)] {
        calc.add_point(x, 10.0, phase)?;
        calc.set_self_gmr(phase, 0.011)?;
    }
    print_result(&calc.compute_results()?);

    // Same corridor with twin bundles entered in feet; history keeps both runs.
    calc.clear_all();
    calc.set_unit("ft")?;
    calc.set_line_params("ACSR", 100.0, 0.0141, 60.0);
    for (phase, x) in [("A", -16.4), ("B", 0.0), ("C", 16.4)] {
        calc.add_bundle_preset(phase, BundlePreset::Twin, x, 32.8, 1.5)?;
        calc.set_self_gmr(phase, 0.0435)?;
    }
    print_result(&calc.compute_results()?);

    println!("history: {} runs", calc.history().len());
    Ok(())
}

fn print_result(res: &ComputationResult) {
    println!("run #{} ({})", res.sequence, res.recorded_at.format("%Y-%m-%d %H:%M:%S"));
    for g in &res.bundle_gmrs {
        println!("  GMR {} ({} cond): {:.6} m", g.label, g.conductors, g.gmr_m);
    }
    for g in &res.gmds {
        println!("  GMD {}: {:.6} m", g.pair(), g.gmd_m);
    }
    let k = &res.constants;
    println!("  D_eq = {:.4} m, D_s = {:.5} m", res.equivalent_gmd_m, res.equivalent_gmr_m);
    println!("  R  = {:.4} Ω ({:.5} Ω/km)", k.resistance_ohm, k.resistance_per_km);
    println!("  L  = {:.4} mH ({:.5} mH/km)", k.inductance_h * 1e3, k.inductance_per_km() * 1e3);
    println!("  C  = {:.4} µF ({:.4} nF/km)", k.capacitance_f * 1e6, k.capacitance_per_km() * 1e9);
    println!("  XL = {:.3} Ω, XC = {:.3} Ω", k.inductive_reactance_ohm, k.capacitive_reactance_ohm);
    let omega = angular_frequency(res.config.frequency_hz());
    let zc = k.rlgc().characteristic_impedance(omega);
    println!("  Zc = {:.2} {:+.2}j Ω", zc.re, zc.im);
}
