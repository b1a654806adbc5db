//! Smallest-box selection over a catalog of candidate boxes.

use vivarium_core::{Item, ShippingBox};

use super::PackingError;

/// Pick the smallest box that accommodates every item.
///
/// Pure function over in-memory data; no logging, no I/O. Selection order:
///
/// 1. Boxes whose `max_weight` is below the summed item weight are
///    excluded outright. An empty result here is a real capacity failure
///    the caller must surface, not something to fall back from.
/// 2. Weight-eligible boxes are tried ascending by volume; the first box
///    whose volume covers the summed item volume wins.
/// 3. If no box passes the volume check, the largest weight-eligible box
///    is returned as a best-effort fallback - the policy is "always return
///    a usable box if weight permits".
///
/// Zero items trivially fit the smallest box; callers are expected to
/// guard against empty carts upstream.
///
/// # Errors
///
/// - [`PackingError::NoBoxAvailable`] when the catalog is empty.
/// - [`PackingError::NoBoxFitsWeight`] when no box supports the total
///   weight.
pub fn select_box<'a>(
    items: &[Item],
    boxes: &'a [ShippingBox],
) -> Result<&'a ShippingBox, PackingError> {
    if boxes.is_empty() {
        return Err(PackingError::NoBoxAvailable {
            item_count: items.len(),
        });
    }

    let total_weight: f64 = items.iter().map(|item| item.weight).sum();

    let mut eligible: Vec<&ShippingBox> = boxes
        .iter()
        .filter(|candidate| candidate.max_weight >= total_weight)
        .collect();

    if eligible.is_empty() {
        return Err(PackingError::NoBoxFitsWeight {
            total_weight,
            box_count: boxes.len(),
        });
    }

    // Stable sort keeps catalog order for equal volumes, so ties resolve
    // to the earlier-appearing box.
    eligible.sort_by(|a, b| a.volume().total_cmp(&b.volume()));

    for &candidate in &eligible {
        if fits_by_volume(items, candidate) {
            return Ok(candidate);
        }
    }

    // Best-effort fallback: the last entry is the largest eligible box.
    // `eligible` is non-empty here, checked above.
    eligible
        .last()
        .copied()
        .ok_or(PackingError::NoBoxFitsWeight {
            total_weight,
            box_count: boxes.len(),
        })
}

/// Volume-only fit heuristic.
///
/// Compares summed item volume against box volume. This is a known
/// simplification: it performs no geometric packing or orientation check,
/// so an item longer than any box side can still "fit". Preserved as-is;
/// true 3D bin packing is out of scope.
#[must_use]
pub fn fits_by_volume(items: &[Item], candidate: &ShippingBox) -> bool {
    let total_item_volume: f64 = items.iter().map(Item::volume).sum();
    total_item_volume <= candidate.volume()
}
