//! The scene builder: one depth-first pass from document nodes to the owned
//! element tree.
//!
//! Shapes are constructed per tag and their `transform` attribute applies
//! immediately after construction. A `use` node resolves by cloning whatever
//! the id table holds at the moment it is processed; ids register only after
//! their node has been appended, so forward references resolve to nothing.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::element::{Element, Ellipse, Group, Polygon, Polyline, Shape};
use crate::errors::LoadError;
use crate::transform::{self, Transform};
use crate::types::Point;

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// A parsed document: canvas dimensions plus the top-level elements in
/// document order.
///
/// The scene exclusively owns its tree; transforms are already baked into
/// every element's geometry by the time a `Scene` is handed out.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub elements: Vec<Element>,
}

impl Scene {
    /// Read and build the document at `path`.
    ///
    /// A missing file or malformed markup aborts the whole build; no
    /// partial scene comes back on that path.
    pub fn load(path: impl AsRef<Path>) -> Result<Scene, LoadError> {
        let shown = path.as_ref().display().to_string();
        let source = fs::read_to_string(path.as_ref()).map_err(|source| LoadError::Io {
            path: shown.clone(),
            source,
        })?;
        Scene::from_source(&shown, &source)
    }

    fn from_source(path: &str, source: &str) -> Result<Scene, LoadError> {
        let doc =
            roxmltree::Document::parse(source).map_err(|e| LoadError::xml(path, source, e))?;
        let root = doc.root_element();

        let mut builder = Builder::default();
        let mut registered = Vec::new();
        let elements = builder.build_list(root, &mut registered);

        let scene = Scene {
            width: attr_i32(root, "width"),
            height: attr_i32(root, "height"),
            elements,
        };
        crate::log::debug!(
            width = scene.width,
            height = scene.height,
            elements = scene.elements.len(),
            "scene built"
        );
        Ok(scene)
    }

    /// Draw every top-level element in document order.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for element in &self.elements {
            element.draw(canvas);
        }
    }
}

impl FromStr for Scene {
    type Err = LoadError;

    fn from_str(source: &str) -> Result<Scene, LoadError> {
        Scene::from_source("<input>", source)
    }
}

/// Builder state local to one document pass.
#[derive(Default)]
struct Builder {
    /// Registered ids. Each entry is kept observationally identical to the
    /// live tree node it was registered from (see `build_group`).
    ids: HashMap<String, Element>,
}

impl Builder {
    /// Build the element children of `parent`, in document order.
    ///
    /// `registered` collects every id registered while this subtree was
    /// built, so an enclosing group can forward its transform to the
    /// matching table entries.
    fn build_list(
        &mut self,
        parent: roxmltree::Node<'_, '_>,
        registered: &mut Vec<String>,
    ) -> Vec<Element> {
        let mut elements = Vec::new();
        for node in parent.children().filter(|n| n.is_element()) {
            let Some(element) = self.build_node(node, registered) else {
                continue;
            };
            elements.push(element);
            // Register after append, so the entry reflects the element as it
            // sits in the tree (transform included).
            if let Some(id) = node.attribute("id") {
                if let Some(appended) = elements.last() {
                    self.ids.insert(id.to_string(), appended.clone());
                    registered.push(id.to_string());
                }
            }
        }
        elements
    }

    /// Construct the element for one document node.
    ///
    /// Unknown tags and unresolved references produce nothing.
    fn build_node(
        &mut self,
        node: roxmltree::Node<'_, '_>,
        registered: &mut Vec<String>,
    ) -> Option<Element> {
        let element = match node.tag_name().name() {
            "ellipse" => Ellipse::new(
                Point::new(attr_i32(node, "cx"), attr_i32(node, "cy")),
                Point::new(attr_i32(node, "rx"), attr_i32(node, "ry")),
                attr_color(node, "fill"),
            )
            .into(),
            "circle" => Ellipse::circle(
                Point::new(attr_i32(node, "cx"), attr_i32(node, "cy")),
                attr_i32(node, "r"),
                attr_color(node, "fill"),
            )
            .into(),
            "polyline" => Polyline::new(
                parse_points(node.attribute("points").unwrap_or("")),
                attr_color(node, "stroke"),
            )
            .into(),
            "line" => Polyline::segment(
                Point::new(attr_i32(node, "x1"), attr_i32(node, "y1")),
                Point::new(attr_i32(node, "x2"), attr_i32(node, "y2")),
                attr_color(node, "stroke"),
            )
            .into(),
            "polygon" => Polygon::new(
                parse_points(node.attribute("points").unwrap_or("")),
                attr_color(node, "fill"),
            )
            .into(),
            "rect" => Polygon::rect(
                attr_i32(node, "x"),
                attr_i32(node, "y"),
                attr_i32(node, "width"),
                attr_i32(node, "height"),
                attr_color(node, "fill"),
            )
            .into(),
            "g" => return Some(self.build_group(node, registered)),
            "use" => return self.build_use(node),
            other => {
                crate::log::debug!(tag = other, "skipping unrecognized tag");
                return None;
            }
        };
        Some(self.finish(node, element))
    }

    /// Recursively build a group, then transform it as a whole.
    fn build_group(
        &mut self,
        node: roxmltree::Node<'_, '_>,
        registered: &mut Vec<String>,
    ) -> Element {
        let mut inner = Vec::new();
        let children = self.build_list(node, &mut inner);
        let mut group: Element = Group::new(children).into();
        if let Some(id) = node.attribute("id") {
            group.set_id(id.to_string());
        }

        if let Some((t, origin)) = parsed_transform(node) {
            t.apply(&mut group, origin);
            // The ids registered inside this subtree alias nodes the group
            // just mutated; forward the transform so each table entry keeps
            // matching its live node. Each entry moves once, however many
            // times its id was registered.
            let mut forwarded: HashSet<&str> = HashSet::new();
            for id in &inner {
                if !forwarded.insert(id.as_str()) {
                    continue;
                }
                if let Some(entry) = self.ids.get_mut(id.as_str()) {
                    t.apply(entry, origin);
                }
            }
        }

        registered.append(&mut inner);
        group
    }

    /// Clone the referenced element, if its id is registered by now.
    fn build_use(&self, node: roxmltree::Node<'_, '_>) -> Option<Element> {
        let id = href_id(node)?;
        let Some(mut clone) = self.ids.get(&id).cloned() else {
            crate::log::debug!(id = %id, "reference not registered yet, dropping use node");
            return None;
        };
        if let Some(own) = node.attribute("id") {
            clone.set_id(own.to_string());
        }
        if let Some((t, origin)) = parsed_transform(node) {
            t.apply(&mut clone, origin);
        }
        Some(clone)
    }

    /// Label a leaf shape and apply its transform attribute, if any.
    fn finish(&self, node: roxmltree::Node<'_, '_>, mut element: Element) -> Element {
        if let Some(id) = node.attribute("id") {
            element.set_id(id.to_string());
        }
        if let Some((t, origin)) = parsed_transform(node) {
            t.apply(&mut element, origin);
        }
        element
    }
}

/// The node's transform function plus the pivot it applies about.
fn parsed_transform(node: roxmltree::Node<'_, '_>) -> Option<(Transform, Point)> {
    let t = Transform::parse(node.attribute("transform")?)?;
    let origin = transform::parse_origin(node.attribute("transform-origin"));
    Some((t, origin))
}

/// The `#id` target of a use node (`href` preferred over `xlink:href`).
fn href_id(node: roxmltree::Node<'_, '_>) -> Option<String> {
    let raw = node
        .attribute("href")
        .or_else(|| node.attribute((XLINK_NS, "href")))?;
    let id = raw.trim().strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

/// Integer attribute; absent or malformed values read as zero, since the
/// reader validated required attributes upstream.
fn attr_i32(node: roxmltree::Node<'_, '_>, name: &str) -> i32 {
    node.attribute(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Color attribute, black when absent.
fn attr_color(node: roxmltree::Node<'_, '_>, name: &str) -> Color {
    node.attribute(name)
        .and_then(Color::parse)
        .unwrap_or(Color::BLACK)
}

/// Parse a `points` attribute: `"x,y"` pairs separated by single spaces,
/// each split on its first comma. Pairs without a comma are skipped.
fn parse_points(attr: &str) -> Vec<Point> {
    attr.split(' ')
        .filter_map(|pair| {
            let (x, y) = pair.split_once(',')?;
            Some(Point::new(
                x.trim().parse().unwrap_or(0),
                y.trim().parse().unwrap_or(0),
            ))
        })
        .collect()
}
