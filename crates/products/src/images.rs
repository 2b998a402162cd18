//! Product image lists.
//!
//! Files themselves live in the external blob store; the product only keeps
//! their public URLs, in display order (the first one is the cover).

use uuid::Uuid;

use marketplace_core::SellerId;

/// Appends freshly stored URLs after the existing ones, preserving both orders.
pub fn assign_images(existing: &[String], stored: impl IntoIterator<Item = String>) -> Vec<String> {
    existing.iter().cloned().chain(stored).collect()
}

/// Drops the image at `index`; the remainder keeps its relative order.
///
/// An out-of-range index leaves the list unchanged.
pub fn remove_image_at(images: &[String], index: usize) -> Vec<String> {
    images
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, url)| url.clone())
        .collect()
}

/// Object key for an upload: `<seller>/<nonce>.<ext>`.
///
/// Keys are grouped per seller so the store's access rules can be path based.
/// The original file name only contributes its (lowercased) extension.
pub fn image_object_path(seller_id: SellerId, file_name: &str, nonce: Uuid) -> String {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    match ext {
        Some(ext) => format!("{seller_id}/{nonce}.{ext}"),
        None => format!("{seller_id}/{nonce}"),
    }
}
