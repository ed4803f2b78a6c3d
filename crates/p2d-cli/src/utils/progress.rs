use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use poscar2data::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// A handler whose bar never renders. Used when logging is silenced.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::bar_style())
            .with_message("Scanning...");
        pb.set_draw_target(target);
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::BatchStart { total } => {
                    pb_guard.reset();
                    pb_guard.set_length(total);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                    pb_guard.set_message("Converting");
                }
                Progress::FileStart { name } => {
                    pb_guard.set_message(name);
                }
                Progress::FileConverted { .. } => {
                    pb_guard.inc(1);
                }
                Progress::FileFailed { name, reason } => {
                    pb_guard.println(format!("  ✗ {}: {}", name, reason));
                    pb_guard.inc(1);
                }
                Progress::BatchFinish { converted, failed } => {
                    let message = if failed == 0 {
                        format!("✓ {} converted", converted)
                    } else {
                        format!("{} converted, {} failed", converted, failed)
                    };
                    pb_guard.finish_with_message(message);
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<24} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::hidden();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_tracks_batch_progress() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        callback(Progress::BatchStart { total: 3 });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.length(), Some(3));
            assert_eq!(pb.position(), 0);
            assert!(!pb.is_finished());
        }

        callback(Progress::FileStart {
            name: "Ti3Al-POSCAR".to_string(),
        });
        assert_eq!(handler.pb.lock().unwrap().message(), "Ti3Al-POSCAR");

        callback(Progress::FileConverted {
            name: "Ti3Al-POSCAR".to_string(),
            atoms: 8,
        });
        callback(Progress::FileFailed {
            name: "bad-POSCAR".to_string(),
            reason: "line 7: invalid count".to_string(),
        });
        assert_eq!(handler.pb.lock().unwrap().position(), 2);

        callback(Progress::BatchFinish {
            converted: 1,
            failed: 1,
        });
        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "1 converted, 1 failed");
    }

    #[test]
    fn clean_batch_reports_success() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();
        callback(Progress::BatchStart { total: 0 });
        callback(Progress::BatchFinish {
            converted: 0,
            failed: 0,
        });
        assert_eq!(handler.pb.lock().unwrap().message(), "✓ 0 converted");
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::BatchStart { total: 1 });
            callback(Progress::FileConverted {
                name: "a-POSCAR".to_string(),
                atoms: 1,
            });
            callback(Progress::BatchFinish {
                converted: 1,
                failed: 0,
            });
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.position(), 1);
    }
}
