/// An addressable element of a host document.
pub trait Element {
    fn set_inner_html(&mut self, html: String);
}

/// The host document the weather fragments are written into.
///
/// Elements are never created through this trait, only looked up. A missing
/// element is reported as `None` and left to the caller to handle.
pub trait Document {
    fn get_element_by_id(&mut self, id: &str) -> Option<&mut dyn Element>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: String,
    pub inner_html: String,
}

impl Element for Region {
    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }
}

/// In-process page made of empty regions, kept in the order they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    regions: Vec<Region>,
}

impl Page {
    pub fn new<I, S>(ids: I) -> Page
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let regions = ids
            .into_iter()
            .map(|id| Region {
                id: id.into(),
                inner_html: String::new(),
            })
            .collect();
        Page { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[allow(dead_code)]
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }
}

impl Document for Page {
    fn get_element_by_id(&mut self, id: &str) -> Option<&mut dyn Element> {
        self.regions
            .iter_mut()
            .find(|region| region.id == id)
            .map(|region| region as &mut dyn Element)
    }
}
