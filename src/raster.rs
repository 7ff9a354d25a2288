/// Row-major 2D pixel buffer, just enough surface for whole-buffer
/// remapping and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Raster<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Raster<T> {
        Raster {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn from_buffer(width: usize, height: usize, buffer: Vec<T>) -> Raster<T> {
        assert_eq!(buffer.len(), width * height);
        Raster {
            buffer,
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Raster<T> {
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}
