//! Browser Timer
//!
//! `Delay` backed by `setTimeout`.

use std::time::Duration;

use async_trait::async_trait;

use client_form_core::Delay;

pub struct BrowserDelay;

#[async_trait(?Send)]
impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
