//! The `cam-list` container and the nodes rendered into it

use serde::Serialize;

use crate::api::Camera;


/// Element id the container is mounted under
pub const MOUNT_POINT: &str = "cam-list";

/// Message shown when the backend's camera list is not an array
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response from server";

/// CSS class applied to every camera button
pub const BUTTON_CLASS: &str = "button is-light";


/// A clickable button bound to one camera
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize)]
pub struct Button {
    pub label: String,
    pub class: &'static str,
    pub camera: Camera,
}

impl From<Camera> for Button {
    fn from(camera: Camera) -> Self {
        Self {
            label: camera.name.clone(),
            class: BUTTON_CLASS,
            camera,
        }
    }
}


/// Child node of the container
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Button(Button),
    Message { text: String },
}


/// Ordered collection of nodes displayed under the mount point
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Serialize)]
pub struct Container {
    nodes: Vec<Node>,
}

impl Container {

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Replaces all contents with one button per camera, in order
    pub fn render_cameras(&mut self, cameras: Vec<Camera>) {
        self.clear();
        for camera in cameras {
            self.append(Node::Button(camera.into()));
        }
    }

    /// Replaces all contents with a single message
    pub fn show_message(&mut self, text: &str) {
        self.clear();
        self.append(Node::Message { text: text.into() });
    }

    /// Gets the button at position `index`, if that node is a button
    pub fn button(&self, index: usize) -> Option<&Button> {
        match self.nodes.get(index) {
            Some(Node::Button(button)) => Some(button),
            _ => None,
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Button(button) => Some(button),
            _ => None,
        })
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Message { text } => Some(text.as_str()),
            _ => None,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn cam(id: &str, name: &str) -> Camera {
        Camera { id: id.into(), name: name.into() }
    }

    #[test]
    fn render_replaces_previous_contents() {
        let mut container = Container::default();
        container.show_message(UNEXPECTED_RESPONSE);
        container.render_cameras(vec![cam("a", "A"), cam("b", "B")]);

        let labels: Vec<_> = container.buttons().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(container.messages().count(), 0);
    }

    #[test]
    fn message_replaces_buttons() {
        let mut container = Container::default();
        container.render_cameras(vec![cam("a", "A")]);
        container.show_message(UNEXPECTED_RESPONSE);

        assert_eq!(container.nodes().len(), 1);
        assert_eq!(container.buttons().count(), 0);
        assert_eq!(container.messages().collect::<Vec<_>>(), vec![UNEXPECTED_RESPONSE]);
    }

    #[test]
    fn button_lookup_skips_messages() {
        let mut container = Container::default();
        container.show_message("oops");
        assert!(container.button(0).is_none());

        container.render_cameras(vec![cam("/x", "X")]);
        assert_eq!(container.button(0).map(|b| b.camera.id.as_str()), Some("/x"));
        assert!(container.button(1).is_none());
    }

    #[test]
    fn nodes_serialize_with_kind_tag() {
        let mut container = Container::default();
        container.render_cameras(vec![cam("abc", "Cam B")]);
        let json = serde_json::to_value(&container).unwrap();
        assert_eq!(json["nodes"][0]["kind"], "button");
        assert_eq!(json["nodes"][0]["label"], "Cam B");
        assert_eq!(json["nodes"][0]["class"], BUTTON_CLASS);

        container.show_message("oops");
        let json = serde_json::to_value(&container).unwrap();
        assert_eq!(json["nodes"][0]["kind"], "message");
        assert_eq!(json["nodes"][0]["text"], "oops");
    }
}
