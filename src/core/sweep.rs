// Copyright @yucwang 2021

use crate::core::error::CaptureError;
use crate::core::rng::{block_rng, SensorRng};
use crate::math::ray::Ray3f;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

/// Shared flag checked between rays. Cloning hands out another handle to
/// the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone)]
pub struct CaptureSettings {
    pub seed: u64,
    /// Worker count, 0 picks the available parallelism.
    pub threads: usize,
    pub block_size: usize,
    pub show_progress: bool,
    pub cancel: CancelToken,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            threads: 0,
            block_size: 1024,
            show_progress: false,
            cancel: CancelToken::new(),
        }
    }
}

impl CaptureSettings {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Default::default() }
    }

    fn thread_count(&self) -> usize {
        if self.threads > 0 {
            return self.threads;
        }
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

/// Runs `measure` once per ray on a scoped worker pool and returns the
/// results in ray order. Rays are split into fixed blocks, each measured
/// with its own generator derived from `seed`, so the output does not
/// depend on the number of workers.
pub fn sweep_rays<T, F>(label: &str,
                        rays: &[Ray3f],
                        settings: &CaptureSettings,
                        seed: u64,
                        measure: F) -> Result<Vec<T>, CaptureError>
where
    T: Send,
    F: Fn(&Ray3f, &mut SensorRng) -> T + Sync,
{
    if rays.is_empty() {
        return Ok(Vec::new());
    }

    let block_size = settings.block_size.max(1);
    let total_blocks = (rays.len() + block_size - 1) / block_size;
    let thread_count = settings.thread_count().min(total_blocks);
    let cancel = &settings.cancel;
    let measure = &measure;

    let progress = if settings.show_progress {
        let bar = ProgressBar::new(total_blocks as u64);
        bar.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(label.to_string());
        bar
    } else {
        ProgressBar::hidden()
    };

    let next_block = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, Vec<T>)>();
    let mut blocks: Vec<Option<Vec<T>>> = (0..total_blocks).map(|_| None).collect();

    thread::scope(|scope| {
        for _ in 0..thread_count {
            let next_block = &next_block;
            let tx = tx.clone();
            scope.spawn(move || {
                loop {
                    let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                    if block_index >= total_blocks {
                        break;
                    }

                    let start = block_index * block_size;
                    let end = (start + block_size).min(rays.len());
                    let mut rng = block_rng(seed, block_index);
                    let mut block = Vec::with_capacity(end - start);
                    for ray in &rays[start..end] {
                        if cancel.is_cancelled() {
                            return;
                        }
                        block.push(measure(ray, &mut rng));
                    }
                    if tx.send((block_index, block)).is_err() {
                        break;
                    }
                }
            });
        }

        drop(tx);
        for (block_index, block) in rx.iter() {
            blocks[block_index] = Some(block);
            progress.inc(1);
        }
    });
    progress.finish_and_clear();

    if cancel.is_cancelled() {
        return Err(CaptureError::Cancelled(label.to_string()));
    }

    let mut output = Vec::with_capacity(rays.len());
    for block in blocks {
        match block {
            Some(values) => output.extend(values),
            None => return Err(CaptureError::Incomplete(label.to_string())),
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector3f;
    use rand::Rng;

    fn rays(n: usize) -> Vec<Ray3f> {
        (0..n).map(|i| Ray3f::new(Vector3f::new(i as f64, 0.0, 0.0),
                                  Vector3f::new(0.0, 0.0, -1.0), None, None)).collect()
    }

    #[test]
    fn test_results_keep_ray_order() {
        let rays = rays(1000);
        let settings = CaptureSettings { block_size: 64, threads: 4, ..Default::default() };
        let xs = sweep_rays("order", &rays, &settings, 1, |ray, _| ray.origin().x).unwrap();
        assert_eq!(xs.len(), 1000);
        assert!(xs.iter().enumerate().all(|(i, &x)| x == i as f64));
    }

    #[test]
    fn test_output_independent_of_thread_count() {
        let rays = rays(500);
        let draw = |_: &Ray3f, rng: &mut SensorRng| rng.random::<u64>();
        let one = CaptureSettings { block_size: 32, threads: 1, ..Default::default() };
        let many = CaptureSettings { block_size: 32, threads: 8, ..Default::default() };
        let a = sweep_rays("a", &rays, &one, 9, draw).unwrap();
        let b = sweep_rays("b", &rays, &many, 9, draw).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cancelled_sweep_errors() {
        let rays = rays(100);
        let settings = CaptureSettings::default();
        settings.cancel.cancel();
        let result = sweep_rays("cancelled", &rays, &settings, 0, |_, _| 1u8);
        assert!(matches!(result, Err(CaptureError::Cancelled(_))));
    }

    #[test]
    fn test_empty_sweep() {
        let settings = CaptureSettings::default();
        let result: Vec<u8> = sweep_rays("empty", &[], &settings, 0, |_, _| 1u8).unwrap();
        assert!(result.is_empty());
    }
}
