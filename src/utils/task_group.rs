// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// 有界任务组
///
/// 固定容量的准入闸门加任务完成跟踪器：最多允许`capacity`个任务同时运行，
/// 收集所有并发任务中观察到的第一个错误，并提供单一的"等待全部完成"操作。
pub struct BoundedTaskGroup<E> {
    semaphore: Arc<Semaphore>,
    tasks: JoinSet<Result<(), E>>,
    capacity: usize,
}

impl<E: Send + 'static> BoundedTaskGroup<E> {
    /// 创建一个新的BoundedTaskGroup实例
    ///
    /// # 参数
    ///
    /// * `capacity` - 最大并发任务数，至少为1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            tasks: JoinSet::new(),
            capacity,
        }
    }

    /// 配置的最大并发任务数
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 提交一个任务
    ///
    /// 当已有`capacity`个任务在运行时，本方法在准入闸门上阻塞，
    /// 直到有槽位释放才返回——提交方无法超过配置的并行度，形成天然的背压。
    pub async fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Result<(), E>> + Send + 'static,
    {
        // The semaphore is never closed, so acquisition only fails on close
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("task group semaphore closed");

        self.tasks.spawn(async move {
            let result = task.await;
            drop(permit);
            result
        });
    }

    /// 等待全部已提交任务结束
    ///
    /// 返回所有任务中观察到的第一个错误；在真正并发下"第一个"不保证任何顺序，
    /// 只保证是某个任务的错误。一个任务失败不会取消其他任务：
    /// 所有已提交的任务都会运行到结束。
    pub async fn wait(mut self) -> Result<(), E> {
        let mut first_error = None;

        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
                Err(join_err) if join_err.is_panic() => {
                    std::panic::resume_unwind(join_err.into_panic());
                }
                // Cancellation is never requested on this JoinSet
                Err(_) => {}
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
