//! The calculator panel owned by the host.
//!
//! At most one calculator exists per panel. It is created lazily the first
//! time the panel is toggled or shown, survives hide/show cycles with its
//! history, and is dropped on unload.

use tracing::info;

use crate::calculator::{Calculator, ClipboardError, copy_to_clipboard};
use crate::config::Config;

#[derive(Debug)]
pub struct Panel {
    config: Config,
    calculator: Option<Calculator>,
    visible: bool,
}

impl Panel {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            calculator: None,
            visible: false,
        }
    }

    pub fn is_created(&self) -> bool {
        self.calculator.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Create the calculator on first use, otherwise flip visibility.
    /// Returns the new visibility.
    pub fn toggle(&mut self) -> bool {
        if self.calculator.is_none() {
            self.show();
        } else {
            self.visible = !self.visible;
            info!(visible = self.visible, "toggled calculator panel");
        }
        self.visible
    }

    pub fn show(&mut self) {
        if self.calculator.is_none() {
            info!(
                history_capacity = self.config.history_capacity,
                mode = ?self.config.mode(),
                "creating calculator panel"
            );
            self.calculator = Some(self.config.calculator());
        }
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Drop the calculator together with its history.
    pub fn unload(&mut self) {
        if self.calculator.take().is_some() {
            info!("unloaded calculator panel");
        }
        self.visible = false;
    }

    pub fn calculator(&self) -> Option<&Calculator> {
        self.calculator.as_ref()
    }

    pub fn calculator_mut(&mut self) -> Option<&mut Calculator> {
        self.calculator.as_mut()
    }

    /// Copy the current display to the clipboard. Returns `false` when no
    /// calculator has been created yet.
    pub fn copy_display(&self) -> Result<bool, ClipboardError> {
        match &self.calculator {
            Some(calc) => copy_to_clipboard(calc.display()).map(|()| true),
            None => Ok(false),
        }
    }
}
