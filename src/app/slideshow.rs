use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Slide;

#[derive(Clone, Debug, Default)]
pub struct Slideshow {
    slides: Vec<Slide>,
    selected: usize,
}

impl Slideshow {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, selected: 0 }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.selected)
    }

    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.selected = (self.selected + 1) % self.slides.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.slides.is_empty() {
            self.selected = (self.selected + self.slides.len() - 1) % self.slides.len();
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.slides.shuffle(rng);
        self.selected = 0;
    }

    pub fn replace_selected(&mut self, slide: Slide) -> bool {
        match self.slides.get_mut(self.selected) {
            Some(current) => {
                *current = slide;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn text(value: &str) -> Slide {
        Slide::Text {
            text: value.to_owned(),
        }
    }

    fn slideshow() -> Slideshow {
        Slideshow::new(vec![text("a"), text("b"), text("c")])
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut show = slideshow();
        show.prev();
        assert_eq!(show.selected(), 2);
        show.next();
        assert_eq!(show.selected(), 0);
        show.next();
        show.next();
        show.next();
        assert_eq!(show.selected(), 0);
    }

    #[test]
    fn shuffle_keeps_slides_and_resets_selection() {
        let mut show = slideshow();
        show.next();
        show.shuffle(&mut StdRng::seed_from_u64(8));
        assert_eq!(show.selected(), 0);

        let mut texts = show
            .slides()
            .iter()
            .map(|slide| match slide {
                Slide::Text { text } => text.clone(),
                Slide::Image { src } => src.clone(),
            })
            .collect::<Vec<_>>();
        texts.sort();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn replace_only_touches_selected_slide() {
        let mut show = slideshow();
        show.next();
        let image = Slide::Image {
            src: "upload.png".to_owned(),
        };
        assert!(show.replace_selected(image.clone()));
        assert_eq!(show.slides(), &[text("a"), image, text("c")]);
    }

    #[test]
    fn empty_slideshow_is_inert() {
        let mut show = Slideshow::default();
        show.next();
        show.prev();
        assert_eq!(show.selected(), 0);
        assert!(show.current().is_none());
        assert!(!show.replace_selected(text("x")));
    }
}
