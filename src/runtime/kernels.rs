//! Kernel effect runtime: services `LaunchKernel`/`ExecuteCell` effects on a
//! tokio runtime and feeds status actions back to the store over a channel
//! drained by the UI loop.
//!
//! The session here is a local mock standing in for a real kernel transport:
//! it acknowledges execution with busy/idle status transitions. The wire
//! protocol itself is an external collaborator.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc::unbounded_channel;

use crate::state::{Action, Channels, Effect, ExecuteRequest, KernelRef, KernelStatus};

pub struct KernelRuntime {
    runtime: Runtime,
    action_tx: Sender<Action>,
    action_rx: Receiver<Action>,
}

impl KernelRuntime {
    pub fn new() -> io::Result<Self> {
        let runtime = Runtime::new()?;
        let (action_tx, action_rx) = mpsc::channel();
        Ok(Self {
            runtime,
            action_tx,
            action_rx,
        })
    }

    /// Actions produced by kernel sessions since the last drain.
    pub fn drain_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    pub fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::LaunchKernel {
                kernel_ref,
                kernelspec_name,
                ..
            } => {
                tracing::info!(?kernel_ref, spec = ?kernelspec_name, "launching kernel session");
                self.spawn_session(kernel_ref);
            }
            Effect::ExecuteCell {
                kernel_ref,
                channels,
                cell_id,
                source,
            } => {
                let delivered = channels.send(ExecuteRequest { cell_id, source });
                if !delivered {
                    tracing::warn!(?kernel_ref, "kernel channel closed, marking not connected");
                    let _ = self.action_tx.send(Action::SetKernelStatus {
                        kernel_ref,
                        status: KernelStatus::NotConnected,
                    });
                }
            }
            // Scrolling belongs to the UI loop.
            Effect::ScrollIntoView { .. } => {}
        }
    }

    fn spawn_session(&self, kernel_ref: KernelRef) {
        let tx = self.action_tx.clone();
        self.runtime.spawn(async move {
            // Simulated startup latency before the channels come up.
            tokio::time::sleep(Duration::from_millis(120)).await;

            let (execute_tx, mut execute_rx) = unbounded_channel::<ExecuteRequest>();
            let _ = tx.send(Action::KernelChannelsReady {
                kernel_ref,
                channels: Channels { execute_tx },
            });
            let _ = tx.send(Action::SetKernelStatus {
                kernel_ref,
                status: KernelStatus::Idle,
            });

            while let Some(request) = execute_rx.recv().await {
                let _ = tx.send(Action::SetKernelStatus {
                    kernel_ref,
                    status: KernelStatus::Busy,
                });
                tokio::time::sleep(Duration::from_millis(150)).await;
                tracing::debug!(
                    cell = %request.cell_id,
                    bytes = request.source.len(),
                    "mock kernel executed cell"
                );
                let _ = tx.send(Action::SetKernelStatus {
                    kernel_ref,
                    status: KernelStatus::Idle,
                });
            }

            let _ = tx.send(Action::SetKernelStatus {
                kernel_ref,
                status: KernelStatus::NotConnected,
            });
        });
    }
}
