/// Tolerance used for geometric containment and ratio comparisons.
pub const EPS: f64 = 1e-6;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Stable 64-bit id for a string key (image URLs, resource names).
pub(crate) fn hash_str(s: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(s.as_bytes());
    h.finish()
}

/// `inner` lies within `outer`, allowing `eps` slack on every edge.
pub(crate) fn rect_within(inner: kurbo::Rect, outer: kurbo::Rect, eps: f64) -> bool {
    inner.x0 >= outer.x0 - eps
        && inner.y0 >= outer.y0 - eps
        && inner.x1 <= outer.x1 + eps
        && inner.y1 <= outer.y1 + eps
}

pub(crate) fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Smallest rect with aspect `ratio` (width / height) covering `target`, centred on it.
///
/// Degenerate targets and ratios return `target` unchanged.
pub(crate) fn cover_rect(target: kurbo::Rect, ratio: f64) -> kurbo::Rect {
    let (w, h) = (target.width(), target.height());
    if !(is_positive_finite(ratio) && is_positive_finite(w) && is_positive_finite(h)) {
        return target;
    }
    let size = if w / h > ratio {
        (w, w / ratio)
    } else {
        (h * ratio, h)
    };
    kurbo::Rect::from_center_size(target.center(), size)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
