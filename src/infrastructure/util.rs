use crate::application::ports::util::SlugGenerator;

/// ASCII-transliterating kebab-case normalizer backed by the `slug` crate.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
