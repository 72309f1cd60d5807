//! Built-in progressive condensation scenario

use forgetit_core::resource::{Category, NewResource, PRESERVATION_IMPORTANCE_KEY};

/// One step of the scenario timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Let this many days pass
    Advance(u32),
    /// Access the sample at this index
    Access(usize),
    /// Snapshot every sample
    Capture,
}

pub const DOCUMENT: usize = 0;
pub const EMAIL: usize = 1;
pub const CODE: usize = 2;
pub const NOTE: usize = 3;

/// A year of use: the code is revisited twice, the document once
pub const TIMELINE: &[Step] = &[
    Step::Capture,
    Step::Advance(30),
    Step::Access(CODE),
    Step::Capture,
    Step::Advance(60),
    Step::Access(DOCUMENT),
    Step::Capture,
    Step::Advance(90),
    Step::Capture,
    Step::Advance(180),
    Step::Access(CODE),
    Step::Capture,
];

const PROPOSAL: &str = r#"Project Proposal: AI-Powered Data Analysis

Executive Summary:
This proposal outlines a comprehensive approach to implementing artificial intelligence algorithms for data analysis within our organization. The project aims to reduce manual data processing by 75% while increasing analytical accuracy by at least 35%.

Background:
Currently, our data analysis processes rely heavily on manual extraction and interpretation, leading to inefficiencies and potential inaccuracies. Market research indicates that similar organizations have achieved significant operational improvements through AI implementation.

Methodology:
1. Data Collection and Preparation
2. Algorithm Selection and Customization
3. Integration with Existing Systems
4. Testing and Validation
5. Staff Training and Deployment

Timeline:
The project is estimated to take 6 months from initiation to full deployment, with key milestones at months 2, 4, and 5.

Budget:
Total estimated cost: $425,000, including software licensing, consulting services, and internal resource allocation.

Expected Benefits:
- Reduced processing time from 4.2 days to under 1 day
- Improved accuracy in predictive analytics
- Enhanced reporting capabilities
- Potential annual savings of $380,000

Conclusion:
This investment in AI-powered data analysis represents a strategic opportunity to enhance our operational efficiency while positioning us for future growth and innovation in the data-driven marketplace."#;

const FOLLOW_UP: &str = r#"From: manager@company.com
To: team@company.com
Subject: Follow-up from Quarterly Planning Meeting

Team,

Thanks for your participation in yesterday's quarterly planning session. I wanted to summarize the key decisions and action items:

1. We will prioritize the customer portal redesign for Q3, with a target launch date of September 15.

2. Marketing campaign for the new product line will begin in August, coordinated by Sarah.

3. Budget adjustments have been approved - department heads will receive updated figures by Friday.

4. The office relocation timeline has been pushed back by one month due to construction delays.

5. Next all-hands meeting is scheduled for July 12 at 10 AM.

Please review the attached presentation for additional details. Let me know if you have any questions.

Regards,
Manager"#;

const BATCH_FN: &str = r#"def process_data_batch(data_list, normalize=True, filter_outliers=False):
    """
    Process a batch of data points applying normalization and outlier filtering.

    Returns:
    - Processed data as numpy array
    """
    import numpy as np

    # Convert to numpy array for processing
    data_array = np.array(data_list, dtype=float)

    # Remove NaN values
    data_array = data_array[~np.isnan(data_array)]

    if filter_outliers and len(data_array) > 10:
        # Remove outliers (values more than 3 std from mean)
        mean = np.mean(data_array)
        std = np.std(data_array)
        data_array = data_array[abs(data_array - mean) <= 3 * std]

    if normalize and len(data_array) > 0:
        # Normalize to 0-1 range
        min_val = np.min(data_array)
        max_val = np.max(data_array)
        if max_val > min_val:
            data_array = (data_array - min_val) / (max_val - min_val)

    return data_array"#;

const SUPPLIES: &str = "Printer paper (5 reams), Stapler, Blue pens (box of 12), Sticky notes (assorted colors), Whiteboard markers, Hand sanitizer, Coffee pods for meeting room";

fn sample(
    title: &str,
    category: Category,
    content: &str,
    preservation_importance: f64,
    relevance: f64,
) -> NewResource {
    NewResource::new(title, category, content)
        .with_context(PRESERVATION_IMPORTANCE_KEY, preservation_importance)
        .with_initial_relevance(relevance)
}

/// The four sample resources, indexed by [`DOCUMENT`], [`EMAIL`], [`CODE`], [`NOTE`]
pub fn samples() -> Vec<NewResource> {
    vec![
        sample(
            "Project Proposal: AI-Powered Data Analysis",
            Category::Document,
            PROPOSAL,
            0.85,
            0.95,
        ),
        sample(
            "Meeting Follow-up: Quarterly Planning",
            Category::Email,
            FOLLOW_UP,
            0.65,
            0.9,
        ),
        sample(
            "Data Processing Utility Function",
            Category::Code,
            BATCH_FN,
            0.75,
            0.85,
        ),
        sample("Office Supplies to Order", Category::Note, SUPPLIES, 0.3, 0.8),
    ]
}
