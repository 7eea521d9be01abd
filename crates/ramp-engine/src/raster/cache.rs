use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use super::PixelFormat;

/// Raster cache configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RasterCacheConfig {
    /// Buffers larger than this many pixels are dropped on release instead of retained.
    pub max_retained_pixels: usize,
}

impl Default for RasterCacheConfig {
    fn default() -> Self {
        Self {
            max_retained_pixels: 4 * 1024 * 1024,
        }
    }
}

/// Pool of reusable pixel buffers, one slot per [`PixelFormat`].
///
/// Contract:
/// - [`acquire`](Self::acquire) moves the slot's buffer out, so a buffer is only
///   ever owned by one caller at a time
/// - a miss (empty slot, or a retained buffer that is too small) allocates
/// - [`release`](Self::release) keeps the larger of the returned and retained
///   buffers, subject to `max_retained_pixels`
/// - [`clear`](Self::clear) drops everything; the next acquire reallocates
///
/// Each slot has its own lock, so the two formats never contend.
#[derive(Debug)]
pub struct RasterCache {
    config: RasterCacheConfig,
    slots: [Mutex<Option<Vec<u32>>>; PixelFormat::COUNT],
}

static GLOBAL: LazyLock<RasterCache> = LazyLock::new(|| RasterCache::new(RasterCacheConfig::default()));

impl Default for RasterCache {
    fn default() -> Self {
        Self::new(RasterCacheConfig::default())
    }
}

impl RasterCache {
    pub fn new(config: RasterCacheConfig) -> Self {
        Self {
            config,
            slots: [Mutex::new(None), Mutex::new(None)],
        }
    }

    /// Process-wide cache used by contexts that are not given one explicitly.
    pub fn global() -> &'static RasterCache {
        &GLOBAL
    }

    /// Returns a buffer holding at least `len` pixels.
    ///
    /// Contents are unspecified; callers overwrite what they use.
    pub fn acquire(&self, format: PixelFormat, len: usize) -> Vec<u32> {
        let retained = self.slot(format).take();

        match retained {
            Some(buf) if buf.len() >= len => {
                log::trace!("raster cache hit ({format:?}, {} >= {len})", buf.len());
                buf
            }
            Some(buf) => {
                log::trace!("raster cache grow ({format:?}, {} -> {len})", buf.len());
                vec![0; len]
            }
            None => {
                log::trace!("raster cache miss ({format:?}, {len})");
                vec![0; len]
            }
        }
    }

    /// Returns a buffer to the pool.
    pub fn release(&self, format: PixelFormat, buf: Vec<u32>) {
        if buf.len() > self.config.max_retained_pixels {
            log::debug!(
                "raster cache dropping {} pixel buffer (limit {})",
                buf.len(),
                self.config.max_retained_pixels
            );
            return;
        }

        let mut slot = self.slot(format);
        match slot.as_ref() {
            Some(existing) if existing.len() >= buf.len() => {}
            _ => *slot = Some(buf),
        }
    }

    /// Drops all retained buffers.
    pub fn clear(&self) {
        for format in PixelFormat::ALL {
            self.slot(format).take();
        }
        log::debug!("raster cache cleared");
    }

    /// Length of the buffer currently retained for `format`, if any.
    pub fn retained_len(&self, format: PixelFormat) -> Option<usize> {
        self.slot(format).as_ref().map(Vec::len)
    }

    fn slot(&self, format: PixelFormat) -> MutexGuard<'_, Option<Vec<u32>>> {
        self.slots[format.slot()].lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── acquire ───────────────────────────────────────────────────────────

    #[test]
    fn acquire_on_empty_allocates_requested_len() {
        let cache = RasterCache::default();
        assert_eq!(cache.acquire(PixelFormat::Argb, 64).len(), 64);
    }

    #[test]
    fn acquire_reuses_large_enough_buffer() {
        let cache = RasterCache::default();
        let mut buf = cache.acquire(PixelFormat::Argb, 100);
        buf[0] = 0xDEAD_BEEF;
        cache.release(PixelFormat::Argb, buf);

        let again = cache.acquire(PixelFormat::Argb, 50);
        assert_eq!(again.len(), 100);
        assert_eq!(again[0], 0xDEAD_BEEF);
        // moved out: nobody else can get it
        assert_eq!(cache.retained_len(PixelFormat::Argb), None);
    }

    #[test]
    fn acquire_grows_when_retained_is_too_small() {
        let cache = RasterCache::default();
        cache.release(PixelFormat::Rgb, vec![0; 10]);
        assert_eq!(cache.acquire(PixelFormat::Rgb, 20).len(), 20);
        assert_eq!(cache.retained_len(PixelFormat::Rgb), None);
    }

    #[test]
    fn formats_use_separate_slots() {
        let cache = RasterCache::default();
        cache.release(PixelFormat::Rgb, vec![7; 16]);
        assert_eq!(cache.retained_len(PixelFormat::Argb), None);
        assert_eq!(cache.acquire(PixelFormat::Argb, 16)[0], 0);
        assert_eq!(cache.retained_len(PixelFormat::Rgb), Some(16));
    }

    // ── release ───────────────────────────────────────────────────────────

    #[test]
    fn release_keeps_the_larger_buffer() {
        let cache = RasterCache::default();
        cache.release(PixelFormat::Argb, vec![0; 32]);
        cache.release(PixelFormat::Argb, vec![0; 8]);
        assert_eq!(cache.retained_len(PixelFormat::Argb), Some(32));
        cache.release(PixelFormat::Argb, vec![0; 64]);
        assert_eq!(cache.retained_len(PixelFormat::Argb), Some(64));
    }

    #[test]
    fn release_over_limit_is_dropped() {
        let cache = RasterCache::new(RasterCacheConfig { max_retained_pixels: 16 });
        cache.release(PixelFormat::Argb, vec![0; 17]);
        assert_eq!(cache.retained_len(PixelFormat::Argb), None);
        cache.release(PixelFormat::Argb, vec![0; 16]);
        assert_eq!(cache.retained_len(PixelFormat::Argb), Some(16));
    }

    #[test]
    fn clear_drops_everything() {
        let cache = RasterCache::default();
        cache.release(PixelFormat::Argb, vec![0; 4]);
        cache.release(PixelFormat::Rgb, vec![0; 4]);
        cache.clear();
        assert_eq!(cache.retained_len(PixelFormat::Argb), None);
        assert_eq!(cache.retained_len(PixelFormat::Rgb), None);
    }

    #[test]
    fn concurrent_acquire_never_shares_a_buffer() {
        let cache = RasterCache::default();
        cache.release(PixelFormat::Argb, vec![0; 128]);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| cache.acquire(PixelFormat::Argb, 128)))
                .collect();
            let bufs: Vec<Vec<u32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            let mut ptrs: Vec<_> = bufs.iter().map(|b| b.as_ptr()).collect();
            ptrs.sort();
            ptrs.dedup();
            assert_eq!(ptrs.len(), bufs.len());
        });
    }
}
