//! Animated versions of the five sorts.
//!
//! Each variant mutates a working copy, hands every state-changing step to an
//! `on_step` observer and then waits on the [`Pacer`]. The stop flag is checked
//! before each comparison; a stopped run keeps every element it started with.

use crate::algorithms::Algorithm;
use crate::pacing::{CancelFlag, Immediate, Pacer};
use futures::future::{FutureExt, LocalBoxFuture};
use log::{debug, warn};
use serde::Serialize;

/// Final state of an animated run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOutcome<T> {
    pub values: Vec<T>,
    /// The run saw the stop flag and returned early.
    pub cancelled: bool,
}

struct Run<'a, T, P: ?Sized, F> {
    arr: Vec<T>,
    delay_ms: u32,
    pacer: &'a P,
    cancel: &'a CancelFlag,
    on_step: F,
    halted: bool,
}

impl<'a, T, P, F> Run<'a, T, P, F>
where
    T: PartialOrd + Clone,
    P: Pacer + ?Sized,
    F: FnMut(&[T]),
{
    fn stopped(&mut self) -> bool {
        if self.cancel.is_cancelled() {
            self.halted = true;
        }
        self.halted
    }

    /// Hand the current order to the observer without pausing.
    fn publish(&mut self) {
        (self.on_step)(&self.arr);
    }

    /// Publish, then wait one pacing interval.
    async fn step(&mut self) {
        self.publish();
        self.pacer.pause(self.delay_ms).await;
    }

    async fn bubble(&mut self) {
        let n = self.arr.len();
        for i in 0..n {
            for j in 0..n - i - 1 {
                if self.stopped() {
                    return;
                }
                if self.arr[j] > self.arr[j + 1] {
                    self.arr.swap(j, j + 1);
                    self.step().await;
                }
            }
        }
    }

    async fn selection(&mut self) {
        let n = self.arr.len();
        for i in 0..n {
            let mut min_idx = i;
            for j in i + 1..n {
                if self.stopped() {
                    return;
                }
                if self.arr[j] < self.arr[min_idx] {
                    min_idx = j;
                }
            }
            if min_idx != i {
                self.arr.swap(i, min_idx);
                self.step().await;
            }
        }
    }

    async fn insertion(&mut self) {
        for i in 1..self.arr.len() {
            let key = self.arr[i].clone();
            let mut hole = i;
            while hole > 0 && self.arr[hole - 1] > key {
                if self.stopped() {
                    // The hole holds a duplicate; put the key back before leaving.
                    self.arr[hole] = key;
                    return;
                }
                self.arr[hole] = self.arr[hole - 1].clone();
                hole -= 1;
                self.step().await;
            }
            self.arr[hole] = key;
            self.publish();
        }
    }

    /// Sort `arr[lo..hi]`.
    fn merge_sort(&mut self, lo: usize, hi: usize) -> LocalBoxFuture<'_, ()> {
        async move {
            if hi - lo < 2 || self.stopped() {
                return;
            }
            // Left half takes the middle element on odd lengths.
            let mid = lo + (hi - lo + 1) / 2;
            self.merge_sort(lo, mid).await;
            self.merge_sort(mid, hi).await;
            self.merge(lo, mid, hi).await;
            self.publish();
        }
        .boxed_local()
    }

    async fn merge(&mut self, lo: usize, mid: usize, hi: usize) {
        let left = self.arr[lo..mid].to_vec();
        let right = self.arr[mid..hi].to_vec();
        let (mut i, mut j, mut k) = (0, 0, lo);

        while i < left.len() && j < right.len() {
            if self.stopped() {
                break;
            }
            // `<=` keeps equal elements from the left half first.
            if left[i] <= right[j] {
                self.arr[k] = left[i].clone();
                i += 1;
            } else {
                self.arr[k] = right[j].clone();
                j += 1;
            }
            k += 1;
            self.step().await;
        }

        // Runs on a stop too, otherwise the range would hold duplicates.
        for item in left[i..].iter().chain(&right[j..]) {
            self.arr[k] = item.clone();
            k += 1;
        }
    }

    /// Sort `arr[lo..hi]`.
    fn quick_sort(&mut self, lo: usize, hi: usize) -> LocalBoxFuture<'_, ()> {
        async move {
            if hi - lo > 1 && !self.stopped() {
                if let Some(pivot) = self.partition(lo, hi).await {
                    self.quick_sort(lo, pivot).await;
                    self.quick_sort(pivot + 1, hi).await;
                }
            }
            self.publish();
        }
        .boxed_local()
    }

    /// Lomuto partition around `arr[hi - 1]`. Returns the pivot's final index,
    /// or `None` if the run was stopped before the pivot was placed.
    async fn partition(&mut self, lo: usize, hi: usize) -> Option<usize> {
        let pivot_idx = hi - 1;
        let mut store = lo;
        for j in lo..pivot_idx {
            if self.stopped() {
                return None;
            }
            if self.arr[j] < self.arr[pivot_idx] {
                self.arr.swap(store, j);
                store += 1;
                self.step().await;
            }
        }
        self.arr.swap(store, pivot_idx);
        Some(store)
    }
}

/// Sort `values` ascending with the chosen algorithm, pausing `delay_ms`
/// through `pacer` after every published step.
pub async fn animate<T, P, F>(
    algorithm: Algorithm,
    values: Vec<T>,
    delay_ms: u32,
    pacer: &P,
    cancel: &CancelFlag,
    on_step: F,
) -> SortOutcome<T>
where
    T: PartialOrd + Clone,
    P: Pacer + ?Sized,
    F: FnMut(&[T]),
{
    let n = values.len();
    debug!("{} over {} values, {} ms per step", algorithm, n, delay_ms);

    let mut run = Run {
        arr: values,
        delay_ms,
        pacer,
        cancel,
        on_step,
        halted: false,
    };

    match algorithm {
        Algorithm::Bubble => run.bubble().await,
        Algorithm::Selection => run.selection().await,
        Algorithm::Insertion => run.insertion().await,
        Algorithm::Merge => run.merge_sort(0, n).await,
        Algorithm::Quick => run.quick_sort(0, n).await,
    }

    if run.halted {
        debug!("{} stopped before completion", algorithm);
    }

    SortOutcome {
        values: run.arr,
        cancelled: run.halted,
    }
}

/// Run `algorithm` without pauses and collect every snapshot it publishes.
pub fn trace<T: PartialOrd + Clone>(algorithm: Algorithm, values: Vec<T>) -> Vec<Vec<T>> {
    let mut snapshots = Vec::new();
    let cancel = CancelFlag::new();
    let finished = animate(algorithm, values, 0, &Immediate, &cancel, |s: &[T]| {
        snapshots.push(s.to_vec())
    })
    .now_or_never();

    if finished.is_none() {
        warn!("{} trace did not complete synchronously", algorithm);
    }
    snapshots
}
