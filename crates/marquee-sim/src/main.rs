use anyhow::{bail, Context};
use marquee_core::{Marquee, ManualClock, MotionConfig};
use rand::prelude::*;

const DEFAULT_FPS: f64 = 60.0;
const DEFAULT_SECONDS: f64 = 3.0;
const BASE_SPEED: f64 = 3.0;
const REPORT_EVERY_SEC: f64 = 0.1;

/// Phases of the synthetic trace, as fractions of the run.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Scrolling,
    Idle,
    Hovered,
}

fn phase_at(t: f64, total: f64) -> Phase {
    let f = t / total;
    if f < 0.3 {
        Phase::Scrolling
    } else if (0.6..0.8).contains(&f) {
        Phase::Hovered
    } else {
        Phase::Idle
    }
}

fn parse_args() -> anyhow::Result<(f64, f64)> {
    let mut args = std::env::args().skip(1);
    let fps = match args.next() {
        Some(a) => a.parse::<f64>().with_context(|| format!("bad fps {a:?}"))?,
        None => DEFAULT_FPS,
    };
    let seconds = match args.next() {
        Some(a) => a.parse::<f64>().with_context(|| format!("bad duration {a:?}"))?,
        None => DEFAULT_SECONDS,
    };
    if !(fps.is_finite() && fps > 0.0) {
        bail!("fps must be positive, got {fps}");
    }
    if !(seconds.is_finite() && seconds > 0.0) {
        bail!("duration must be positive, got {seconds}");
    }
    Ok((fps, seconds))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let (fps, seconds) = parse_args()?;
    let step = 1.0 / fps;
    log::info!("simulating {seconds:.2}s at {fps:.1} fps, base speed {BASE_SPEED}");

    let clock = ManualClock::new(0.0);
    let mut engine = Marquee::new(MotionConfig::new(BASE_SPEED), clock.clone());
    let mut rng = StdRng::seed_from_u64(1);
    let mut offset = 0.0_f64;
    let mut phase = Phase::Idle;
    let mut next_report = 0.0;

    engine.on_scroll(offset);
    engine.tick();
    let frames = (seconds * fps).round() as u64;
    for frame in 1..=frames {
        let t = frame as f64 * step;
        clock.set(t);

        let now_phase = phase_at(t, seconds);
        if now_phase != phase {
            log::debug!("t={t:.3} phase {phase:?} -> {now_phase:?}");
            match now_phase {
                Phase::Hovered => engine.pointer_enter(),
                _ => engine.pointer_leave(),
            }
            phase = now_phase;
        }
        if phase == Phase::Scrolling {
            // ~1500 px/s with wheel-like jitter
            offset += (1500.0 + rng.gen_range(-400.0..400.0)) * step;
            engine.on_scroll(offset);
        }

        let wrapped = engine.tick();
        if t + 1e-9 >= next_report {
            let v = engine.velocity();
            log::info!(
                "t={:>6.3} position={:>9.4} wrapped={:>9.4} raw={:>8.1} smoothed={:>8.1} gate={:?}",
                t,
                engine.state().position,
                wrapped,
                v.raw,
                v.smoothed,
                engine.gate()
            );
            next_report += REPORT_EVERY_SEC;
        }
    }
    log::info!("final position {:.6}", engine.state().position);
    Ok(())
}
