use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_job::RenderJob;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::cancellation::SupersededToken;
use crate::core::actions::render_field::render_field_parallel_rayon::render_cancelable;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Default)]
struct Queue {
    job: Option<(u64, RenderJob)>,
    rendering: bool,
}

impl Queue {
    fn is_idle(&self) -> bool {
        self.job.is_none() && !self.rendering
    }
}

struct SharedState {
    /// Newest generation published by the owner. Anything older is stale.
    latest_generation: AtomicU64,
    queue: Mutex<Queue>,
    job_ready: Condvar,
    idle: Condvar,
    shutdown: AtomicBool,
    sink: Arc<dyn FrameSink>,
}

impl SharedState {
    fn queue(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.latest_generation.load(Ordering::Acquire) == generation
    }
}

/// Full-resolution renders on one background thread.
///
/// The owner numbers every frame it produces. Submitting a job, or
/// announcing a frame rendered elsewhere with [`supersede`](Self::supersede),
/// makes that generation the latest: a queued job is replaced and the job in
/// flight is cancelled at its next poll. A finished frame is presented only
/// while its generation is still the latest, and the check happens under the
/// queue lock, so the sink never receives a frame older than one it already
/// has.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            latest_generation: AtomicU64::new(0),
            queue: Mutex::new(Queue::default()),
            job_ready: Condvar::new(),
            idle: Condvar::new(),
            shutdown: AtomicBool::new(false),
            sink,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || Self::worker_loop(&worker_shared));

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `job` as frame `generation`.
    pub fn submit(&self, generation: u64, job: RenderJob) {
        let mut queue = self.shared.queue();
        self.shared
            .latest_generation
            .store(generation, Ordering::Release);

        if let Some((replaced, _)) = queue.job.replace((generation, job)) {
            trace!(replaced, generation, "queued render job replaced");
        }
        drop(queue);

        self.shared.job_ready.notify_one();
    }

    /// Marks `generation` as presented by the owner. Pending background work
    /// is dropped.
    pub fn supersede(&self, generation: u64) {
        let mut queue = self.shared.queue();
        self.shared
            .latest_generation
            .store(generation, Ordering::Release);

        if let Some((dropped, _)) = queue.job.take() {
            trace!(dropped, generation, "queued render job dropped");
        }
        drop(queue);

        self.shared.idle.notify_all();
    }

    /// Blocks until nothing is queued or rendering.
    pub fn wait_until_idle(&self) {
        let mut queue = self.shared.queue();

        while !queue.is_idle() && !self.shared.shutdown.load(Ordering::Acquire) {
            queue = self
                .shared
                .idle
                .wait(queue)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    pub fn shutdown(&mut self) {
        {
            let _queue = self.shared.queue();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.job_ready.notify_one();
        self.shared.idle.notify_all();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &SharedState) {
        loop {
            let (generation, job) = {
                let mut queue = shared.queue();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(next) = queue.job.take() {
                        queue.rendering = true;
                        break next;
                    }

                    queue = shared
                        .job_ready
                        .wait(queue)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let token =
                SupersededToken::new(generation, &shared.latest_generation, &shared.shutdown);

            let start = Instant::now();
            let result = render_cancelable(
                job.region,
                job.width,
                job.height,
                job.max_iterations,
                &token,
            );
            let render_duration = start.elapsed();

            let mut queue = shared.queue();
            match result {
                Ok(raster) if shared.is_latest(token.generation()) => {
                    shared.sink.present(FrameData {
                        generation,
                        raster,
                        region: job.region,
                        is_final: job.is_final,
                        render_duration,
                    });
                }
                Ok(_) => debug!(generation, "dropping stale frame"),
                Err(_) => debug!(generation, "render job superseded"),
            }
            queue.rendering = false;
            drop(queue);

            shared.idle.notify_all();
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
