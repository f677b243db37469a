// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::ControlFlow,
          sync::{Arc, MutexGuard, PoisonError},
          time::Duration};

use tokio::{sync::broadcast,
            time::{Instant, MissedTickBehavior, interval_at}};

use crate::{FrameSequencer, LockedOutputDevice, OutputDevice, StdMutex, StyleLookup,
            StyleTable, TitleMarkers, TitleProducer, TitleSpinnerError,
            TitleSpinnerOptions, lock_output_device_as_mut};

/// Renders a spinner into the terminal's window / tab title.
///
/// There are two ways to drive it:
/// 1. Manually, by calling [`Self::update()`] whenever you like.
/// 2. Automatically, by calling [`Self::start()`], which spawns a tokio task that calls
///    the equivalent of [`Self::update()`] once every [`Self::interval()`], until
///    [`Self::stop()`] is called.
///
/// The spinner is either **idle** (no timer) or **running** (one timer). It can be
/// started and stopped any number of times, and [`Self::spin()`] / [`Self::update()`]
/// work in both states.
///
/// ```no_run
/// # use std::time::Duration;
/// # use r3bl_title_spinner::{TitleSpinner, TitleSpinnerOptions};
/// # async fn example() -> miette::Result<()> {
/// let mut spinner = TitleSpinner::try_new(
///     TitleSpinnerOptions::default()
///         .with_title_producer(|sequencer| format!("{} compiling", sequencer.spin())),
/// )?;
///
/// spinner.update()?.start()?;
/// tokio::time::sleep(Duration::from_secs(1)).await;
/// spinner.stop();
/// # Ok(())
/// # }
/// ```
///
/// Dropping a running spinner stops it.
pub struct TitleSpinner {
    style: String,
    interval: Duration,
    safe_state: SafeSpinnerState,
    maybe_timer: Option<TimerHandle>,
    next_timer_id: u64,
}

/// Everything that a tick needs. Manual updates and the timer task share this, so the
/// cursor only ever moves under the lock.
struct SpinnerState {
    sequencer: FrameSequencer,
    maybe_title_producer: Option<TitleProducer>,
    markers: TitleMarkers,
    output_device: OutputDevice,
    /// The only timer registration that is allowed to write. [None] while idle.
    maybe_active_timer_id: Option<u64>,
}

type SafeSpinnerState = Arc<StdMutex<SpinnerState>>;

/// Roughly 30 years. Used as the first tick when `now + interval` can't be represented
/// as an [Instant], so that the timer simply never fires.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Present only while the spinner is running.
struct TimerHandle {
    id: u64,
    shutdown_sender: broadcast::Sender<()>,
}

impl std::fmt::Debug for TitleSpinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleSpinner")
            .field("style", &self.style)
            .field("interval", &self.interval)
            .field("cursor", &self.cursor())
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl TitleSpinner {
    /// Create a spinner, resolving the style (if needed) from [`StyleTable::default()`],
    /// which only knows about `"dots"`.
    ///
    /// # Errors
    ///
    /// See [`Self::try_new_with_lookup()`].
    pub fn try_new(options: TitleSpinnerOptions) -> Result<Self, TitleSpinnerError> {
        Self::try_new_with_lookup(options, &StyleTable::default())
    }

    /// Create a spinner. If both `frames` and `interval` are given in `options`, the
    /// `lookup` isn't consulted. Otherwise the missing values are taken from the style
    /// named `options.style`.
    ///
    /// # Errors
    ///
    /// - [`TitleSpinnerError::UnknownStyle`] if the style is needed but `lookup` can't
    ///   resolve it.
    /// - [`TitleSpinnerError::EmptyFrames`] if there are no frames.
    /// - [`TitleSpinnerError::ZeroInterval`] if the interval is zero.
    pub fn try_new_with_lookup<L>(
        options: TitleSpinnerOptions,
        lookup: &L,
    ) -> Result<Self, TitleSpinnerError>
    where
        L: StyleLookup + ?Sized,
    {
        let TitleSpinnerOptions {
            style,
            interval,
            frames,
            output_device,
            title_producer,
            markers,
        } = options;

        let (frames, interval) = match (frames, interval) {
            (Some(frames), Some(interval)) => (frames, interval),
            (maybe_frames, maybe_interval) => {
                let Some(named_style) = lookup.resolve(&style) else {
                    return Err(TitleSpinnerError::UnknownStyle { style });
                };
                (
                    maybe_frames.unwrap_or(named_style.frames),
                    maybe_interval.unwrap_or(named_style.interval),
                )
            }
        };

        if interval.is_zero() {
            return Err(TitleSpinnerError::ZeroInterval);
        }
        let sequencer = FrameSequencer::try_new(frames)?;

        tracing::debug!(
            style = %style,
            ?interval,
            frame_count = sequencer.len(),
            has_title_producer = title_producer.is_some(),
            "title spinner created"
        );

        Ok(Self {
            style,
            interval,
            safe_state: Arc::new(StdMutex::new(SpinnerState {
                sequencer,
                maybe_title_producer: title_producer,
                markers,
                output_device,
                maybe_active_timer_id: None,
            })),
            maybe_timer: None,
            next_timer_id: 0,
        })
    }

    /// Returns the next frame and advances the cursor, wrapping around at the end. No
    /// I/O happens here.
    pub fn spin(&mut self) -> String { lock_state(&self.safe_state).sequencer.spin() }

    /// Write one title update: `open + title + close`, where the title comes from the
    /// title producer (if there is one) or from [`Self::spin()`].
    ///
    /// # Errors
    ///
    /// Returns [`TitleSpinnerError::SinkWrite`] if writing to the output device fails.
    /// The cursor has still advanced in that case.
    pub fn update(&mut self) -> Result<&mut Self, TitleSpinnerError> {
        lock_state(&self.safe_state).render_and_write()?;
        Ok(self)
    }

    /// Start writing a title update every [`Self::interval()`]. The first automatic
    /// update happens one full interval from now.
    ///
    /// If the spinner is already running, the existing timer is stopped first, so there
    /// is only ever a single timer per spinner.
    ///
    /// A write error during an automatic update is logged, and the timer keeps going.
    ///
    /// # Errors
    ///
    /// Returns [`TitleSpinnerError::NoAsyncRuntime`] if this isn't called from within a
    /// tokio runtime.
    pub fn start(&mut self) -> Result<&mut Self, TitleSpinnerError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| TitleSpinnerError::NoAsyncRuntime)?;

        if self.is_running() {
            tracing::debug!(style = %self.style, "title spinner restarted, replacing timer");
        }
        self.stop();

        let timer_id = self.next_timer_id;
        self.next_timer_id = self.next_timer_id.wrapping_add(1);
        lock_state(&self.safe_state).maybe_active_timer_id = Some(timer_id);

        let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);

        // These are all moved into the spawn block.
        let safe_state = self.safe_state.clone();
        let period = self.interval;
        let first_tick_at = first_tick_after(Instant::now(), period);

        runtime.spawn(async move {
            // Dropped when the task ends, including when a title producer panics.
            let _registration = TimerRegistration {
                safe_state: safe_state.clone(),
                timer_id,
            };

            let mut interval = interval_at(first_tick_at, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    // Poll shutdown channel. This also fires when the sender is dropped.
                    // This branch is cancel safe because recv is cancel safe.
                    _ = shutdown_receiver.recv() => {
                        break;
                    }

                    // Poll interval.
                    // This branch is cancel safe because tick is cancel safe.
                    _ = interval.tick() => {
                        if run_tick(&safe_state, timer_id).is_break() {
                            break;
                        }
                    }
                }
            }

            tracing::trace!(timer_id, "title spinner timer task exited");
        });

        self.maybe_timer = Some(TimerHandle {
            id: timer_id,
            shutdown_sender,
        });

        tracing::debug!(style = %self.style, timer_id, interval = ?self.interval, "title spinner started");

        Ok(self)
    }

    /// Stop the automatic updates. Once this returns, no more automatic writes happen,
    /// even if a tick is due. Does nothing if the spinner isn't running.
    pub fn stop(&mut self) -> &mut Self {
        if let Some(timer) = self.maybe_timer.take() {
            // A tick checks its id under this same lock, so after this no tick writes.
            lock_state(&self.safe_state).maybe_active_timer_id = None;

            // We don't care about the result of this operation, the task may have
            // already exited.
            timer.shutdown_sender.send(()).ok();

            tracing::debug!(style = %self.style, timer_id = timer.id, "title spinner stopped");
        }
        self
    }

    /// False once [`Self::stop()`] is called, and also if the timer task ended because
    /// a title producer panicked during an automatic update.
    #[must_use]
    pub fn is_running(&self) -> bool {
        lock_state(&self.safe_state).maybe_active_timer_id.is_some()
    }

    /// The name of the style this spinner was configured with. Note that if both frames
    /// and interval were given explicitly, this style was never looked up.
    #[must_use]
    pub fn style(&self) -> &str { &self.style }

    #[must_use]
    pub fn interval(&self) -> Duration { self.interval }

    #[must_use]
    pub fn frames(&self) -> Vec<String> {
        lock_state(&self.safe_state).sequencer.frames().to_vec()
    }

    /// Index of the frame that the next spin will return.
    #[must_use]
    pub fn cursor(&self) -> usize { lock_state(&self.safe_state).sequencer.cursor() }

    #[must_use]
    pub fn markers(&self) -> TitleMarkers { lock_state(&self.safe_state).markers.clone() }

    #[must_use]
    pub fn has_title_producer(&self) -> bool {
        lock_state(&self.safe_state).maybe_title_producer.is_some()
    }

    /// A clone of the handle to the output device. It shares the same resource.
    #[must_use]
    pub fn output_device(&self) -> OutputDevice {
        lock_state(&self.safe_state).output_device.clone()
    }
}

impl Drop for TitleSpinner {
    fn drop(&mut self) { self.stop(); }
}

impl SpinnerState {
    fn render_and_write(&mut self) -> Result<(), TitleSpinnerError> {
        let title = match self.maybe_title_producer.as_mut() {
            Some(title_producer) => title_producer(&mut self.sequencer),
            None => self.sequencer.spin(),
        };
        let output = self.markers.format(&title);

        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(self.output_device);
        mut_ref
            .write_all(output.as_bytes())
            .map_err(TitleSpinnerError::SinkWrite)?;
        mut_ref.flush().map_err(TitleSpinnerError::SinkWrite)?;

        Ok(())
    }
}

/// One automatic update. Breaks if this timer has been stopped or replaced.
fn run_tick(safe_state: &SafeSpinnerState, timer_id: u64) -> ControlFlow<()> {
    let mut state = lock_state(safe_state);

    if state.maybe_active_timer_id != Some(timer_id) {
        return ControlFlow::Break(());
    }

    match state.render_and_write() {
        Ok(()) => tracing::trace!(timer_id, "title spinner tick"),
        Err(error) => {
            tracing::error!(timer_id, %error, "title spinner failed to write title");
        }
    }

    ControlFlow::Continue(())
}

/// Clears the active timer id when the timer task ends. A normal exit has already been
/// deregistered by [`TitleSpinner::stop()`], so this only matters after a panic.
struct TimerRegistration {
    safe_state: SafeSpinnerState,
    timer_id: u64,
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        let mut state = lock_state(&self.safe_state);
        if state.maybe_active_timer_id == Some(self.timer_id) {
            state.maybe_active_timer_id = None;
            tracing::error!(
                timer_id = self.timer_id,
                "title spinner timer task ended unexpectedly"
            );
        }
    }
}

fn first_tick_after(now: Instant, period: Duration) -> Instant {
    now.checked_add(period).unwrap_or_else(|| now + FAR_FUTURE)
}

/// The state is only mutated by short, non panicking sections, so a poisoned lock still
/// holds a consistent cursor.
fn lock_state(safe_state: &SafeSpinnerState) -> MutexGuard<'_, SpinnerState> {
    safe_state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::{io::Write,
              sync::atomic::{AtomicUsize, Ordering}};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{NamedStyle, OutputDeviceExt, StdoutMock};

    const QUANTUM: Duration = Duration::from_millis(100);

    fn expected_titles(markers: &TitleMarkers, titles: &[&str]) -> String {
        titles.iter().map(|it| markers.format(it)).collect()
    }

    fn new_ab_spinner() -> (TitleSpinner, StdoutMock) {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let spinner = TitleSpinner::try_new(
            TitleSpinnerOptions::default()
                .with_frames(["a", "b"])
                .with_interval(QUANTUM)
                .with_output_device(output_device),
        )
        .unwrap();
        (spinner, stdout_mock)
    }

    /// A sink that always fails.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    #[test]
    fn test_defaults_use_dots() {
        let spinner = TitleSpinner::try_new(TitleSpinnerOptions::default()).unwrap();
        let dots = NamedStyle::dots();
        assert_eq!(spinner.style(), "dots");
        assert_eq!(spinner.frames(), dots.frames);
        assert_eq!(spinner.interval(), dots.interval);
        assert_eq!(spinner.markers(), TitleMarkers::default());
        assert!(!spinner.has_title_producer());
        assert!(!spinner.is_running());
        assert!(!spinner.output_device().is_mock);
    }

    #[test]
    fn test_changing_style() {
        let monkey = NamedStyle::new(["🙈", "🙉", "🙊"], Duration::from_millis(300));
        let table = StyleTable::default().with_style("monkey", monkey.clone());

        let spinner = TitleSpinner::try_new_with_lookup(
            TitleSpinnerOptions::default().with_style("monkey"),
            &table,
        )
        .unwrap();

        assert_eq!(spinner.frames(), monkey.frames);
        assert_eq!(spinner.interval(), monkey.interval);
    }

    #[test]
    fn test_overwrite_interval_keeps_style_frames() {
        let monkey = NamedStyle::new(["🙈", "🙉"], Duration::from_millis(300));
        let table = StyleTable::empty().with_style("monkey", monkey.clone());

        let spinner = TitleSpinner::try_new_with_lookup(
            TitleSpinnerOptions::default()
                .with_style("monkey")
                .with_interval(Duration::from_millis(7)),
            &table,
        )
        .unwrap();

        assert_eq!(spinner.frames(), monkey.frames);
        assert_eq!(spinner.interval(), Duration::from_millis(7));
    }

    #[test]
    fn test_overwrite_frames_keeps_style_interval() {
        let monkey = NamedStyle::new(["🙈", "🙉"], Duration::from_millis(300));
        let table = StyleTable::empty().with_style("monkey", monkey);

        let spinner = TitleSpinner::try_new_with_lookup(
            TitleSpinnerOptions::default()
                .with_style("monkey")
                .with_frames(["a", "b"]),
            &table,
        )
        .unwrap();

        assert_eq!(spinner.frames(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(spinner.interval(), Duration::from_millis(300));
    }

    #[test]
    fn test_unknown_style_without_overrides_fails() {
        let result =
            TitleSpinner::try_new(TitleSpinnerOptions::default().with_style("nope"));
        let Err(error) = result else {
            panic!("expected an error");
        };
        assert!(error.is_configuration_error());
        assert!(
            matches!(error, TitleSpinnerError::UnknownStyle { ref style } if style == "nope")
        );
    }

    #[test]
    fn test_unknown_style_with_only_frames_fails() {
        let result = TitleSpinner::try_new(
            TitleSpinnerOptions::default()
                .with_style("nope")
                .with_frames(["a"]),
        );
        assert!(matches!(result, Err(TitleSpinnerError::UnknownStyle { .. })));
    }

    #[test]
    fn test_explicit_frames_and_interval_skip_lookup() {
        let lookup_calls = AtomicUsize::new(0);
        let counting_lookup = |_: &str| -> Option<NamedStyle> {
            lookup_calls.fetch_add(1, Ordering::SeqCst);
            None
        };

        let spinner = TitleSpinner::try_new_with_lookup(
            TitleSpinnerOptions::default()
                .with_style("not in any table")
                .with_frames(["a"])
                .with_interval(QUANTUM),
            &counting_lookup,
        )
        .unwrap();

        assert_eq!(lookup_calls.load(Ordering::SeqCst), 0);
        assert_eq!(spinner.style(), "not in any table");
    }

    #[test]
    fn test_empty_frames_rejected() {
        let result = TitleSpinner::try_new(
            TitleSpinnerOptions::default()
                .with_frames(Vec::<String>::new())
                .with_interval(QUANTUM),
        );
        assert!(matches!(result, Err(TitleSpinnerError::EmptyFrames)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = TitleSpinner::try_new(
            TitleSpinnerOptions::default().with_interval(Duration::ZERO),
        );
        assert!(matches!(result, Err(TitleSpinnerError::ZeroInterval)));
    }

    #[test]
    fn test_spin_wraps_without_writing() {
        let (mut spinner, stdout_mock) = new_ab_spinner();
        assert_eq!(spinner.spin(), "a");
        assert_eq!(spinner.spin(), "b");
        assert_eq!(spinner.spin(), "a");
        assert_eq!(spinner.cursor(), 1);
        assert!(stdout_mock.get_copy_of_buffer().is_empty());
    }

    #[test]
    fn test_update_writes_frame_and_advances() {
        let (mut spinner, stdout_mock) = new_ab_spinner();
        let markers = spinner.markers();

        spinner.update().unwrap();
        assert_eq!(spinner.cursor(), 1);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b]0;a\x07".to_string()
        );

        spinner.update().unwrap().update().unwrap();
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            expected_titles(&markers, &["a", "b", "a"])
        );

        // Title updates never show up as visible content.
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "");
    }

    #[test]
    fn test_update_with_title_producer() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let mut spinner = TitleSpinner::try_new(
            TitleSpinnerOptions::default()
                .with_frames(["a", "b"])
                .with_interval(QUANTUM)
                .with_output_device(output_device)
                .with_markers(TitleMarkers::new("<", ">"))
                .with_title_producer(move |sequencer| {
                    calls_clone.fetch_add(1, Ordering::SeqCst);
                    format!("[{}]", sequencer.spin())
                }),
        )
        .unwrap();

        spinner.update().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "<[a]>");

        spinner.update().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "<[a]><[b]>");
    }

    #[test]
    fn test_title_producer_need_not_spin() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut spinner = TitleSpinner::try_new(
            TitleSpinnerOptions::default()
                .with_output_device(output_device)
                .with_markers(TitleMarkers::new("", "|"))
                .with_title_producer(|_| "static".to_string()),
        )
        .unwrap();

        spinner.update().unwrap().update().unwrap();
        assert_eq!(spinner.cursor(), 0);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "static|static|");
    }

    #[test]
    fn test_update_propagates_sink_error() {
        let mut spinner = TitleSpinner::try_new(
            TitleSpinnerOptions::default().with_output_device(OutputDevice::new_from(BrokenPipe)),
        )
        .unwrap();

        let result = spinner.update().map(|_| ());
        assert!(matches!(result, Err(TitleSpinnerError::SinkWrite(_))));
        assert_eq!(spinner.cursor(), 1);
    }

    #[test]
    fn test_start_without_runtime_fails() {
        let (mut spinner, _stdout_mock) = new_ab_spinner();
        let result = spinner.start().map(|_| ());
        assert!(matches!(result, Err(TitleSpinnerError::NoAsyncRuntime)));
        assert!(!spinner.is_running());
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let (mut spinner, stdout_mock) = new_ab_spinner();
        spinner.stop().stop();
        assert!(!spinner.is_running());
        assert!(stdout_mock.get_copy_of_buffer().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_title_producer_with_timer() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let updates = Arc::new(AtomicUsize::new(0));
        let updates_clone = updates.clone();

        let mut spinner = TitleSpinner::try_new(
            TitleSpinnerOptions::default()
                .with_frames(["a", "b"])
                .with_interval(QUANTUM)
                .with_output_device(output_device)
                .with_title_producer(move |sequencer| {
                    updates_clone.fetch_add(1, Ordering::SeqCst);
                    format!("[{}]", sequencer.spin())
                }),
        )
        .unwrap();
        let markers = spinner.markers();

        spinner.update().unwrap();
        assert_eq!(updates.load(Ordering::SeqCst), 1);

        spinner.start().unwrap();
        assert!(spinner.is_running());

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(updates.load(Ordering::SeqCst), 4);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(updates.load(Ordering::SeqCst), 5);

        spinner.stop();
        assert!(!spinner.is_running());

        tokio::time::sleep(QUANTUM * 10).await;
        assert_eq!(updates.load(Ordering::SeqCst), 5);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            expected_titles(&markers, &["[a]", "[b]", "[a]", "[b]", "[a]"])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_is_one_interval_after_start() {
        let (mut spinner, stdout_mock) = new_ab_spinner();
        spinner.start().unwrap();

        tokio::time::sleep(QUANTUM / 2).await;
        assert!(stdout_mock.get_copy_of_buffer().is_empty());

        tokio::time::sleep(QUANTUM).await;
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b]0;a\x07");
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_twice_keeps_single_timer() {
        let (mut spinner, stdout_mock) = new_ab_spinner();
        let markers = spinner.markers();

        spinner.start().unwrap().start().unwrap();
        assert!(spinner.is_running());

        tokio::time::sleep(QUANTUM * 3 + QUANTUM / 2).await;
        spinner.stop();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            expected_titles(&markers, &["a", "b", "a"])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_stop() {
        let (mut spinner, stdout_mock) = new_ab_spinner();
        let markers = spinner.markers();

        spinner.start().unwrap();
        tokio::time::sleep(QUANTUM + QUANTUM / 2).await;
        spinner.stop();

        tokio::time::sleep(QUANTUM * 5).await;
        spinner.start().unwrap();
        tokio::time::sleep(QUANTUM * 2 + QUANTUM / 2).await;
        spinner.stop();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            expected_titles(&markers, &["a", "b", "a"])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_timer() {
        let (mut spinner, stdout_mock) = new_ab_spinner();
        spinner.start().unwrap();
        tokio::time::sleep(QUANTUM + QUANTUM / 2).await;
        drop(spinner);

        tokio::time::sleep(QUANTUM * 5).await;
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b]0;a\x07");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_error_during_tick_keeps_timer_running() {
        let mut spinner = TitleSpinner::try_new(
            TitleSpinnerOptions::default()
                .with_frames(["a", "b", "c"])
                .with_interval(QUANTUM)
                .with_output_device(OutputDevice::new_from(BrokenPipe)),
        )
        .unwrap();

        spinner.start().unwrap();
        tokio::time::sleep(QUANTUM * 2 + QUANTUM / 2).await;

        // Two ticks ran (and failed to write), so the cursor moved twice.
        assert!(spinner.is_running());
        assert_eq!(spinner.cursor(), 2);
        spinner.stop();
    }

    #[test]
    fn test_first_tick_after_saturates_to_far_future() {
        let now = Instant::now();
        assert_eq!(first_tick_after(now, QUANTUM), now + QUANTUM);
        assert_eq!(first_tick_after(now, Duration::MAX), now + FAR_FUTURE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_with_huge_interval_never_ticks() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut spinner = TitleSpinner::try_new(
            TitleSpinnerOptions::default()
                .with_frames(["a"])
                .with_interval(Duration::MAX)
                .with_output_device(output_device),
        )
        .unwrap();

        spinner.start().unwrap();
        assert!(spinner.is_running());

        tokio::time::sleep(QUANTUM * 10).await;
        assert!(stdout_mock.get_copy_of_buffer().is_empty());

        spinner.stop();
        assert!(!spinner.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_title_producer_ends_timer() {
        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut spinner = TitleSpinner::try_new(
            TitleSpinnerOptions::default()
                .with_frames(["a", "b"])
                .with_interval(QUANTUM)
                .with_output_device(output_device)
                .with_title_producer(move |sequencer| {
                    if call_count_clone.fetch_add(1, Ordering::SeqCst) == 0 {
                        panic!("title producer failed");
                    }
                    sequencer.spin()
                }),
        )
        .unwrap();
        let markers = spinner.markers();

        spinner.start().unwrap();
        tokio::time::sleep(QUANTUM * 3 + QUANTUM / 2).await;

        // The task died on the first tick, so no more ticks came.
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert!(!spinner.is_running());
        assert!(stdout_mock.get_copy_of_buffer().is_empty());

        // The spinner is still usable, and can be started again.
        spinner.start().unwrap();
        assert!(spinner.is_running());
        tokio::time::sleep(QUANTUM * 2 + QUANTUM / 2).await;
        spinner.stop();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            expected_titles(&markers, &["a", "b"])
        );
    }
}
