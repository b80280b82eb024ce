/*
 * Page Module
 *
 * Vertical layout of the portfolio sections and the scroll position over them.
 * Scrolling is eased: input sets a target and every frame moves the offset a
 * fixed fraction of the remaining distance.
 */

pub const PARALLAX_RATE: f32 = -0.5;
const SCROLL_EASE: f32 = 0.15;
const SCROLL_SNAP: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub blurb: String,
    pub top: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
    target: f32,
    max: f32,
}

impl ScrollState {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.target = self.target.min(self.max);
        self.offset = self.offset.min(self.max);
    }

    // Smooth scroll toward `target`
    pub fn scroll_to(&mut self, target: f32) {
        self.target = target.max(0.0).min(self.max);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.target + delta);
    }

    // Returns true while still moving
    pub fn step(&mut self) -> bool {
        let remaining = self.target - self.offset;
        if remaining.abs() <= SCROLL_SNAP {
            let moved = remaining != 0.0;
            self.offset = self.target;
            moved
        } else {
            self.offset += remaining * SCROLL_EASE;
            true
        }
    }
}

#[derive(Clone, Debug)]
pub struct Page {
    sections: Vec<Section>,
    scroll: ScrollState,
    viewport_height: f32,
}

impl Page {
    /// Stack sections of the given heights from the top of the page.
    pub fn new(entries: &[(&str, &str, &str, f32)], viewport_height: f32) -> Self {
        let mut top = 0.0;
        let sections = entries
            .iter()
            .map(|&(id, title, blurb, height)| {
                let section = Section {
                    id: id.to_owned(),
                    title: title.to_owned(),
                    blurb: blurb.to_owned(),
                    top,
                    height,
                };
                top += height;
                section
            })
            .collect();

        let mut page = Self { sections, scroll: ScrollState::default(), viewport_height };
        page.set_viewport_height(viewport_height);
        page
    }

    pub fn portfolio(viewport_height: f32) -> Self {
        Self::new(
            &[
                ("home", "Home", "Machine learning engineer building vision and deep learning systems.", 720.0),
                ("about", "About", "I turn data into models and models into products.", 560.0),
                ("skills", "Skills", "Python, TensorFlow, Keras, OpenCV, Pandas, NumPy, AWS, Docker, Git.", 520.0),
                ("projects", "Projects", "Image classifiers, object detection pipelines and forecasting tools.", 760.0),
                ("education", "Education", "Degrees, certificates and achievements along the way.", 620.0),
                ("contact", "Contact", "Send a message from the panel on the left.", 520.0),
            ],
            viewport_height,
        )
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn content_height(&self) -> f32 {
        self.sections.last().map_or(0.0, |s| s.top + s.height)
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        self.scroll.set_max(self.content_height() - self.viewport_height);
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn scroll_to_section(&mut self, index: usize) {
        if let Some(section) = self.sections.get(index) {
            self.scroll.scroll_to(section.top);
        }
    }

    // Vertical shift of the floating hero code
    pub fn parallax_offset(&self) -> f32 {
        self.scroll.offset() * PARALLAX_RATE
    }
}
