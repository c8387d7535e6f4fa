use std::sync::{Arc, Mutex};

use myrtio_lamp::{LedBackend, Rgb};

/// Backend recording every write and off call
#[derive(Clone, Default)]
pub struct RecordingBackend {
    frames: Arc<Mutex<Vec<Vec<Rgb>>>>,
    offs: Arc<Mutex<Vec<usize>>>,
}

#[allow(dead_code)]
impl RecordingBackend {
    pub fn frame_count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }

    pub fn last_frame(&self) -> Option<Vec<Rgb>> {
        self.frames.lock().unwrap().last().cloned()
    }

    pub fn offs(&self) -> Vec<usize> {
        self.offs.lock().unwrap().clone()
    }
}

impl LedBackend for RecordingBackend {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.lock().unwrap().push(colors.to_vec());
    }

    fn off(&mut self, count: usize) {
        self.offs.lock().unwrap().push(count);
    }
}
