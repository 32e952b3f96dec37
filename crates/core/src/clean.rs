// ABOUTME: Post-scrape cleanup pass over a batch of job records.
// ABOUTME: Unescapes text fields, fixes known location quirks, and derives state and clean_title.

use crate::html_utils::unescape_entities;
use crate::location::state_code;
use crate::models::{JobDescription, JobMeta};
use crate::title::clean_title;

/// Locations boards print without a state, mapped to a resolvable form.
const LOCATION_FIXES: [(&str, &str); 1] = [("New York City", "New York City, NY")];

/// Normalizes every listing in place and recomputes its derived fields.
pub fn clean_job_meta(jobs: &mut [JobMeta]) {
    for job in jobs.iter_mut() {
        job.title = unescape_entities(&job.title);
        job.company = job.company.as_deref().map(unescape_entities);
        job.location = job.location.as_deref().map(|loc| fix_location(&unescape_entities(loc)));
        job.state = state_code(job.location.as_deref()).map(str::to_string);
        job.clean_title = clean_title(&job.title);
    }
}

/// Unescapes the text fields of scraped descriptions.
pub fn clean_descriptions(descriptions: &mut [JobDescription]) {
    for d in descriptions.iter_mut() {
        d.title = unescape_entities(&d.title);
        d.company = unescape_entities(&d.company);
        d.desc = unescape_entities(&d.desc);
    }
}

fn fix_location(location: &str) -> String {
    LOCATION_FIXES
        .iter()
        .find(|(from, _)| *from == location)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| location.to_string())
}
