//! Test Fixtures
//!
//! In-memory document, virtual clock and scripted backend used by the
//! handler tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::commands::FavoriteApi;
use crate::config::UiConfig;
use crate::context::PageContext;
use crate::dom::{CarouselOptions, Dom, DomEvent, Listener, LocalTask, Scheduler, VisibilityOptions, Widgets};
use crate::error::{UiError, UiResult};
use crate::models::FavoriteResponse;

// ========================
// Document
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, PartialEq)]
pub struct FakeFile {
    pub name: String,
    pub mime: String,
}

impl FakeFile {
    pub fn new(name: &str, mime: &str) -> Self {
        Self { name: name.to_string(), mime: mime.to_string() }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.name)
    }
}

#[derive(Default)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    html: String,
    value: String,
    disabled: bool,
    files: Vec<FakeFile>,
}

/// Event record returned by [`FakeDom::fire`]
#[derive(Default)]
pub struct FakeEvent {
    prevented: Cell<bool>,
    stopped: Cell<bool>,
}

impl FakeEvent {
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }

    pub fn propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl DomEvent for FakeEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.stopped.set(true);
    }
}

type PendingRead = (FakeFile, Box<dyn FnOnce(String)>);
type Observer = (Vec<NodeId>, Rc<dyn Fn(&NodeId)>);

/// Arena-backed document rooted at `<body>`
pub struct FakeDom {
    nodes: RefCell<Vec<Node>>,
    listeners: RefCell<Vec<(NodeId, String, Listener)>>,
    observers: RefCell<Vec<Observer>>,
    observer_options: RefCell<Vec<VisibilityOptions>>,
    pending_reads: RefCell<Vec<PendingRead>>,
    focused: Cell<Option<NodeId>>,
    scrolled: RefCell<Vec<NodeId>>,
    location: RefCell<String>,
    navigations: RefCell<Vec<String>>,
}

impl FakeDom {
    pub fn new() -> Self {
        let body = Node { tag: "body".to_string(), ..Default::default() };
        Self {
            nodes: RefCell::new(vec![body]),
            listeners: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            observer_options: RefCell::new(Vec::new()),
            pending_reads: RefCell::new(Vec::new()),
            focused: Cell::new(None),
            scrolled: RefCell::new(Vec::new()),
            location: RefCell::new("https://settle.space/properties".to_string()),
            navigations: RefCell::new(Vec::new()),
        }
    }

    /// Append a new element under `parent`
    pub fn add(&self, parent: &NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.new_node(tag);
        for (name, value) in attrs {
            self.set_attribute(&id, name, value);
            if *name == "value" {
                self.nodes.borrow_mut()[id.0].value = value.to_string();
            }
        }
        self.append_child(parent, &id);
        id
    }

    fn new_node(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node { tag: tag.to_ascii_lowercase(), ..Default::default() });
        NodeId(nodes.len() - 1)
    }

    pub fn fire(&self, target: &NodeId, event: &str) -> FakeEvent {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(id, name, _)| id == target && name == event)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();
        let record = FakeEvent::default();
        for listener in listeners {
            listener(&record);
        }
        record
    }

    pub fn listener_count(&self, target: &NodeId, event: &str) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(id, name, _)| id == target && name == event)
            .count()
    }

    pub fn set_value(&self, element: &NodeId, value: &str) {
        self.nodes.borrow_mut()[element.0].value = value.to_string();
    }

    pub fn select_files(&self, input: &NodeId, files: Vec<FakeFile>) {
        self.nodes.borrow_mut()[input.0].files = files;
    }

    /// Complete outstanding file reads in request order
    pub fn finish_reads(&self) {
        let reads: Vec<PendingRead> = self.pending_reads.borrow_mut().drain(..).collect();
        for (file, on_load) in reads {
            on_load(file.data_url());
        }
    }

    /// Complete outstanding file reads newest first
    pub fn finish_reads_reversed(&self) {
        let reads: Vec<PendingRead> = self.pending_reads.borrow_mut().drain(..).rev().collect();
        for (file, on_load) in reads {
            on_load(file.data_url());
        }
    }

    /// Report `element` as intersecting to every observer watching it
    pub fn intersect(&self, element: &NodeId) {
        let callbacks: Vec<Rc<dyn Fn(&NodeId)>> = self
            .observers
            .borrow()
            .iter()
            .filter(|(targets, _)| targets.contains(element))
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(element);
        }
    }

    pub fn observer_options(&self) -> Vec<VisibilityOptions> {
        self.observer_options.borrow().clone()
    }

    pub fn classes(&self, element: &NodeId) -> Vec<String> {
        self.nodes.borrow()[element.0].classes.clone()
    }

    pub fn style(&self, element: &NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[element.0]
            .styles
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.clone())
    }

    pub fn children(&self, element: &NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[element.0].children.clone()
    }

    pub fn is_disabled(&self, element: &NodeId) -> bool {
        self.nodes.borrow()[element.0].disabled
    }

    /// True when the element is reachable from `<body>`
    pub fn is_attached(&self, element: &NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(*element);
        while let Some(id) = current {
            if id.0 == 0 {
                return true;
            }
            current = nodes[id.0].parent;
        }
        false
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused.get()
    }

    pub fn scrolled(&self) -> Vec<NodeId> {
        self.scrolled.borrow().clone()
    }

    pub fn set_location(&self, url: &str) {
        *self.location.borrow_mut() = url.to_string();
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[root.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn select(&self, root: NodeId, include_root: bool, selector: &str) -> Vec<NodeId> {
        let Some(selector) = parse_selector(selector) else {
            return Vec::new();
        };
        let mut candidates = Vec::new();
        if include_root {
            candidates.push(root);
        }
        candidates.extend(self.descendants(root));
        let nodes = self.nodes.borrow();
        candidates
            .into_iter()
            .filter(|id| selector.iter().any(|compound| compound.matches(&nodes[id.0])))
            .collect()
    }

    fn detach(&self, element: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[element.0].parent.take() {
            nodes[parent.0].children.retain(|child| child != element);
        }
    }
}

impl Dom for FakeDom {
    type Element = NodeId;
    type File = FakeFile;

    fn body(&self) -> Option<NodeId> {
        Some(NodeId(0))
    }

    fn get_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        let nodes = self.nodes.borrow();
        let found = self
            .descendants(NodeId(0))
            .into_iter()
            .find(|node| nodes[node.0].attrs.iter().any(|(name, value)| name == "id" && value == id));
        found
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.select(NodeId(0), true, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(NodeId(0), true, selector)
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Option<NodeId> {
        self.select(*root, false, selector).into_iter().next()
    }

    fn query_all_within(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(*root, false, selector)
    }

    fn closest(&self, element: &NodeId, selector: &str) -> Option<NodeId> {
        let selector = parse_selector(selector)?;
        let nodes = self.nodes.borrow();
        let mut current = Some(*element);
        while let Some(id) = current {
            if selector.iter().any(|compound| compound.matches(&nodes[id.0])) {
                return Some(id);
            }
            current = nodes[id.0].parent;
        }
        None
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        Some(self.new_node(tag))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        self.detach(child);
        let mut nodes = self.nodes.borrow_mut();
        nodes[child.0].parent = Some(*parent);
        nodes[parent.0].children.push(*child);
    }

    fn remove(&self, element: &NodeId) {
        self.detach(element);
    }

    fn inner_html(&self, element: &NodeId) -> String {
        self.nodes.borrow()[element.0].html.clone()
    }

    fn set_inner_html(&self, element: &NodeId, html: &str) {
        for child in self.children(element) {
            self.detach(&child);
        }
        self.nodes.borrow_mut()[element.0].html = html.to_string();
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let node = &nodes[element.0];
        if name == "class" {
            return Some(node.classes.join(" "));
        }
        node.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.clone())
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[element.0];
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        match node.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => node.attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[element.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        if !self.has_class(element, class) {
            self.nodes.borrow_mut()[element.0].classes.push(class.to_string());
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.nodes.borrow_mut()[element.0].classes.retain(|c| c != class);
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let styles = &mut nodes[element.0].styles;
        match styles.iter_mut().find(|(name, _)| name == property) {
            Some(slot) => slot.1 = value.to_string(),
            None => styles.push((property.to_string(), value.to_string())),
        }
    }

    fn value(&self, element: &NodeId) -> String {
        self.nodes.borrow()[element.0].value.clone()
    }

    fn set_disabled(&self, element: &NodeId, disabled: bool) {
        self.nodes.borrow_mut()[element.0].disabled = disabled;
    }

    fn focus(&self, element: &NodeId) {
        self.focused.set(Some(*element));
    }

    fn check_validity(&self, form: &NodeId) -> bool {
        let fields = self.descendants(*form);
        let nodes = self.nodes.borrow();
        fields.iter().all(|id| {
            let node = &nodes[id.0];
            let required = node.attrs.iter().any(|(name, _)| name == "required");
            !required || node.disabled || !node.value.is_empty()
        })
    }

    fn form_entries(&self, form: &NodeId) -> Vec<(String, String)> {
        let fields = self.descendants(*form);
        let nodes = self.nodes.borrow();
        fields
            .iter()
            .filter_map(|id| {
                let node = &nodes[id.0];
                if !matches!(node.tag.as_str(), "input" | "select" | "textarea") || node.disabled {
                    return None;
                }
                let attr = |key: &str| node.attrs.iter().find(|(n, _)| n == key).map(|(_, v)| v.as_str());
                let name = attr("name").filter(|n| !n.is_empty())?;
                match attr("type").unwrap_or("text") {
                    "submit" | "button" | "reset" | "file" | "image" => None,
                    "checkbox" | "radio" if attr("checked").is_none() => None,
                    _ => Some((name.to_string(), node.value.clone())),
                }
            })
            .collect()
    }

    fn selected_files(&self, input: &NodeId) -> Vec<FakeFile> {
        self.nodes.borrow()[input.0].files.clone()
    }

    fn file_type(&self, file: &FakeFile) -> String {
        file.mime.clone()
    }

    fn read_as_data_url(&self, file: FakeFile, on_load: Box<dyn FnOnce(String)>) {
        self.pending_reads.borrow_mut().push((file, on_load));
    }

    fn listen(&self, target: &NodeId, event: &str, listener: Listener) {
        self.listeners.borrow_mut().push((*target, event.to_string(), listener));
    }

    fn observe_visibility(
        &self,
        targets: &[NodeId],
        options: &VisibilityOptions,
        on_visible: Rc<dyn Fn(&NodeId)>,
    ) {
        self.observer_options.borrow_mut().push(options.clone());
        self.observers.borrow_mut().push((targets.to_vec(), on_visible));
    }

    fn scroll_into_view(&self, element: &NodeId) {
        self.scrolled.borrow_mut().push(*element);
    }

    fn location(&self) -> String {
        self.location.borrow().clone()
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
        *self.location.borrow_mut() = url.to_string();
    }
}

// ========================
// Selector matching
// ========================

#[derive(Debug)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
    Contains(String),
}

#[derive(Debug)]
enum Simple {
    Id(String),
    Class(String),
    Attr(String, AttrOp),
    Not(Box<Simple>),
}

#[derive(Debug)]
struct Compound {
    tag: Option<String>,
    parts: Vec<Simple>,
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(&node.tag) {
                return false;
            }
        }
        self.parts.iter().all(|part| part.matches(node))
    }
}

impl Simple {
    fn matches(&self, node: &Node) -> bool {
        let attr = |key: &str| node.attrs.iter().find(|(n, _)| n == key).map(|(_, v)| v.as_str());
        match self {
            Simple::Id(id) => attr("id") == Some(id.as_str()),
            Simple::Class(class) => node.classes.iter().any(|c| c == class),
            Simple::Attr(name, op) => {
                let value = if name == "class" {
                    (!node.classes.is_empty()).then(|| node.classes.join(" "))
                } else {
                    attr(name).map(str::to_string)
                };
                match (value, op) {
                    (None, _) => false,
                    (Some(_), AttrOp::Exists) => true,
                    (Some(v), AttrOp::Equals(expected)) => &v == expected,
                    (Some(v), AttrOp::Prefix(prefix)) => v.starts_with(prefix.as_str()),
                    (Some(v), AttrOp::Contains(needle)) => v.contains(needle.as_str()),
                }
            }
            Simple::Not(inner) => !inner.matches(node),
        }
    }
}

/// Parse a comma-separated list of compound selectors (no combinators)
fn parse_selector(selector: &str) -> Option<Vec<Compound>> {
    selector.split(',').map(|part| parse_compound(part.trim())).collect()
}

fn parse_compound(input: &str) -> Option<Compound> {
    let chars: Vec<char> = input.chars().collect();
    if chars.is_empty() {
        return None;
    }
    let mut pos = 0;
    let tag = match chars[0] {
        '*' => {
            pos = 1;
            None
        }
        c if c.is_ascii_alphabetic() => Some(read_ident(&chars, &mut pos)?),
        _ => None,
    };
    let mut parts = Vec::new();
    while pos < chars.len() {
        if chars[pos] == ':' {
            let rest: String = chars[pos..].iter().collect();
            let inner = rest.strip_prefix(":not(")?;
            let close = inner.find(')')?;
            let mut inner_pos = 0;
            let inner_chars: Vec<char> = inner[..close].chars().collect();
            let simple = parse_simple(&inner_chars, &mut inner_pos)?;
            if inner_pos != inner_chars.len() {
                return None;
            }
            parts.push(Simple::Not(Box::new(simple)));
            pos += ":not(".len() + inner[..close].chars().count() + 1;
        } else {
            parts.push(parse_simple(&chars, &mut pos)?);
        }
    }
    Some(Compound { tag, parts })
}

fn parse_simple(chars: &[char], pos: &mut usize) -> Option<Simple> {
    match chars.get(*pos)? {
        '#' => {
            *pos += 1;
            Some(Simple::Id(read_ident(chars, pos)?))
        }
        '.' => {
            *pos += 1;
            Some(Simple::Class(read_ident(chars, pos)?))
        }
        '[' => {
            *pos += 1;
            let name = read_ident(chars, pos)?;
            let op = match chars.get(*pos)? {
                ']' => {
                    *pos += 1;
                    return Some(Simple::Attr(name, AttrOp::Exists));
                }
                '=' => {
                    *pos += 1;
                    '='
                }
                c @ ('^' | '*') if chars.get(*pos + 1) == Some(&'=') => {
                    *pos += 2;
                    *c
                }
                _ => return None,
            };
            let value = read_value(chars, pos)?;
            if chars.get(*pos) != Some(&']') {
                return None;
            }
            *pos += 1;
            let op = match op {
                '^' => AttrOp::Prefix(value),
                '*' => AttrOp::Contains(value),
                _ => AttrOp::Equals(value),
            };
            Some(Simple::Attr(name, op))
        }
        _ => None,
    }
}

fn read_ident(chars: &[char], pos: &mut usize) -> Option<String> {
    let start = *pos;
    while *pos < chars.len() && (chars[*pos].is_ascii_alphanumeric() || chars[*pos] == '-' || chars[*pos] == '_') {
        *pos += 1;
    }
    (*pos > start).then(|| chars[start..*pos].iter().collect())
}

fn read_value(chars: &[char], pos: &mut usize) -> Option<String> {
    match chars.get(*pos)? {
        quote @ ('"' | '\'') => {
            let quote = *quote;
            *pos += 1;
            let start = *pos;
            while *pos < chars.len() && chars[*pos] != quote {
                *pos += 1;
            }
            let value = chars.get(start..*pos)?.iter().collect();
            *pos += 1;
            Some(value)
        }
        _ => read_ident(chars, pos),
    }
}

// ========================
// Scheduler, widgets, backend
// ========================

type Timer = (Duration, u64, Box<dyn FnOnce()>);

/// Virtual clock plus a manually drained task queue
#[derive(Default)]
pub struct FakeScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
    tasks: RefCell<VecDeque<LocalTask>>,
}

impl FakeScheduler {
    /// Move the clock forward, firing due timers in order
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(index, _)| index);
                due.map(|index| timers.remove(index))
            };
            match next {
                Some((at, _, task)) => {
                    self.now.set(at);
                    task();
                }
                None => break,
            }
        }
        self.now.set(target);
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Await spawned tasks until the queue is empty
    pub async fn run_tasks(&self) {
        loop {
            let next = self.tasks.borrow_mut().pop_front();
            match next {
                Some(task) => task.await,
                None => break,
            }
        }
    }
}

impl Scheduler for FakeScheduler {
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.timers.borrow_mut().push((self.now.get() + delay, seq, task));
    }

    fn spawn(&self, task: LocalTask) {
        self.tasks.borrow_mut().push_back(task);
    }
}

/// Records widget calls as (kind, element)
#[derive(Default)]
pub struct FakeWidgets {
    calls: RefCell<Vec<(&'static str, NodeId)>>,
    carousel_options: RefCell<Vec<CarouselOptions>>,
}

impl FakeWidgets {
    pub fn calls_of(&self, kind: &str) -> Vec<NodeId> {
        self.calls
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, id)| *id)
            .collect()
    }

    pub fn carousel_options(&self) -> Vec<CarouselOptions> {
        self.carousel_options.borrow().clone()
    }
}

impl Widgets<NodeId> for FakeWidgets {
    fn init_tooltip(&self, element: &NodeId) {
        self.calls.borrow_mut().push(("tooltip", *element));
    }

    fn init_carousel(&self, element: &NodeId, options: &CarouselOptions) {
        self.calls.borrow_mut().push(("carousel", *element));
        self.carousel_options.borrow_mut().push(options.clone());
    }

    fn close_alert(&self, element: &NodeId) {
        self.calls.borrow_mut().push(("close_alert", *element));
    }

    fn show_toast(&self, element: &NodeId) {
        self.calls.borrow_mut().push(("show_toast", *element));
    }
}

/// Backend returning scripted responses in order
#[derive(Default)]
pub struct FakeFavoriteApi {
    responses: RefCell<VecDeque<UiResult<FavoriteResponse>>>,
    calls: RefCell<Vec<(String, Option<String>)>>,
}

impl FakeFavoriteApi {
    pub fn respond(&self, is_favorite: bool, message: &str) {
        self.responses.borrow_mut().push_back(Ok(FavoriteResponse {
            is_favorite,
            message: message.to_string(),
        }));
    }

    pub fn fail(&self, error: UiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FavoriteApi for FakeFavoriteApi {
    async fn toggle_favorite(&self, property_id: &str, csrf_token: Option<&str>) -> UiResult<FavoriteResponse> {
        self.calls
            .borrow_mut()
            .push((property_id.to_string(), csrf_token.map(str::to_string)));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(UiError::Js("no scripted response".to_string())))
    }
}

// ========================
// Harness
// ========================

pub struct Harness {
    pub dom: Rc<FakeDom>,
    pub scheduler: Rc<FakeScheduler>,
    pub widgets: Rc<FakeWidgets>,
    pub api: Rc<FakeFavoriteApi>,
    pub ctx: PageContext<FakeDom>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    pub fn with_config(config: UiConfig) -> Self {
        let dom = Rc::new(FakeDom::new());
        let scheduler = Rc::new(FakeScheduler::default());
        let widgets = Rc::new(FakeWidgets::default());
        let api = Rc::new(FakeFavoriteApi::default());
        let ctx = PageContext::new(
            Rc::clone(&dom),
            Rc::clone(&scheduler) as Rc<dyn Scheduler>,
            Rc::clone(&widgets) as Rc<dyn Widgets<NodeId>>,
            Rc::clone(&api) as Rc<dyn FavoriteApi>,
            config,
        );
        Self { dom, scheduler, widgets, api, ctx }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matching() {
        let dom = FakeDom::new();
        let body = dom.body().unwrap();
        let file = dom.add(&body, "input", &[("type", "file"), ("accept", "image/*"), ("id", "photos")]);
        let alert = dom.add(&body, "div", &[("class", "alert alert-success")]);
        dom.add(&body, "div", &[("class", "alert alert-permanent")]);
        let link = dom.add(&body, "a", &[("href", "#top")]);

        assert_eq!(dom.query_all(r#"input[type="file"][accept*="image"]"#), vec![file]);
        assert_eq!(dom.query_all(".alert:not(.alert-permanent)"), vec![alert]);
        assert_eq!(dom.query_all(r##"a[href^="#"]"##), vec![link]);
        assert_eq!(dom.query("#photos"), Some(file));
        assert_eq!(dom.query("#"), None);
    }

    #[test]
    fn test_selector_list_keeps_document_order() {
        let dom = FakeDom::new();
        let body = dom.body().unwrap();
        let form = dom.add(&body, "form", &[]);
        let select = dom.add(&form, "select", &[("name", "city")]);
        let input = dom.add(&form, "input", &[("name", "q")]);

        assert_eq!(dom.query_all_within(&form, "input, select"), vec![select, input]);
        assert_eq!(dom.closest(&input, "form"), Some(form));
    }
}
