//! Attachment staging list for the Documents step

use uuid::Uuid;

/// A staged file descriptor. No binary content is modeled; only the name and
/// media type travel with the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id: Uuid,
    pub display_name: String,
    pub media_type: String,
}

/// Insertion-ordered staging list, independent of form validation.
///
/// Entries get an opaque id at insert time so removal is by stable identity
/// rather than by position; rapid successive removals cannot hit the wrong
/// element after indices shift. Duplicates are allowed and there is no count
/// cap.
#[derive(Debug, Clone, Default)]
pub struct AttachmentList {
    items: Vec<Attachment>,
}

impl AttachmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor, unconditionally. The store does not re-check the
    /// media type; the input control's accept hint is advisory only.
    pub fn add(&mut self, display_name: impl Into<String>, media_type: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Attachment {
            id,
            display_name: display_name.into(),
            media_type: media_type.into(),
        });
        id
    }

    /// Remove by id, returning the removed entry if it was present
    pub fn remove(&mut self, id: Uuid) -> Option<Attachment> {
        let pos = self.items.iter().position(|a| a.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Attachment> {
        self.items.get(index)
    }
}

/// Infer a media type from a file name's extension. Stands in for the file
/// input's metadata; unknown extensions fall back to octet-stream.
pub fn media_type_for(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_appends_in_order() {
        let mut list = AttachmentList::new();
        list.add("paystub.pdf", "application/pdf");
        list.add("id.png", "image/png");
        let names: Vec<_> = list.iter().map(|a| a.display_name.as_str()).collect();
        assert_eq!(names, vec!["paystub.pdf", "id.png"]);
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let mut list = AttachmentList::new();
        list.add("lease.pdf", "application/pdf");
        let id = list.add("paystub.pdf", "application/pdf");
        assert_eq!(list.len(), 2);

        let removed = list.remove(id).unwrap();
        assert_eq!(removed.display_name, "paystub.pdf");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().display_name, "lease.pdf");
    }

    #[test]
    fn test_remove_unknown_id_is_none() {
        let mut list = AttachmentList::new();
        list.add("paystub.pdf", "application/pdf");
        assert!(list.remove(Uuid::new_v4()).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicates_are_distinct_entries() {
        let mut list = AttachmentList::new();
        let first = list.add("paystub.pdf", "application/pdf");
        let second = list.add("paystub.pdf", "application/pdf");
        assert_ne!(first, second);

        // Removing one duplicate leaves the other untouched
        list.remove(first);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().id, second);
    }

    #[test]
    fn test_rapid_removals_by_id_do_not_shift() {
        let mut list = AttachmentList::new();
        let a = list.add("a.pdf", "application/pdf");
        let b = list.add("b.pdf", "application/pdf");
        let c = list.add("c.pdf", "application/pdf");

        list.remove(a);
        list.remove(c);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().id, b);
    }

    #[test]
    fn test_media_type_inference() {
        assert_eq!(media_type_for("paystub.pdf"), "application/pdf");
        assert_eq!(media_type_for("photo.JPG"), "image/jpeg");
        assert_eq!(media_type_for("notes.txt"), "text/plain");
        assert_eq!(media_type_for("mystery"), "application/octet-stream");
        assert_eq!(media_type_for("archive.zip"), "application/octet-stream");
    }
}
