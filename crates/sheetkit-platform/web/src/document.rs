use sheetkit_ui::PortalDocument;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// The browser document as a portal host. Containers are appended to
/// `<body>`.
#[derive(Clone, Debug)]
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        Ok(Self::new(document))
    }
}

impl PortalDocument for DomDocument {
    type Container = Element;
    type Error = JsValue;

    fn find_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_attached(&mut self, id: &str, class_name: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element("div")?;
        element.set_id(id);
        element.set_class_name(class_name);
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&element)?;
        Ok(element)
    }
}
