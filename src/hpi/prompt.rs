//! Scribe prompt assembly for HPI generation.
//!
//! The system prompt pins format, register, and the differential-diagnosis
//! section; the user prompt carries a worked sample followed by the numbered
//! encounter fields. `local_draft` is the deterministic fallback narrative
//! used when no generation backend is configured.

use serde::{Deserialize, Serialize};

pub const SCRIBE_SYSTEM_PROMPT: &str = "You are an expert medical scribe assistant tasked with writing a perfect medical HPI \
for an adult emergency department in Southern California. Follow the provided format, syntax, \
and style meticulously. Convert times to 24-hour format. Format Tmax in parentheses if provided. \
Correct grammatical errors, spelling, and improve terminology for clarity and professionalism, \
aiming for the quality of HPIs from esteemed institutions. Ensure the narrative is smooth and effective. \
Avoid awkward third-person phrasing like 'The patient states that...' where possible, instead \
favoring sentence starters like 'Patient reports that', 'States that', 'Endorses that', 'He/She notes that', etc. \
Whenever a temperature is given in context of a fever complaint (e.g., 102F), you are to format it as (Tmax = 102F). \
A sentence that looks like 'he complains of one day of fever' should look like 'he complains of one day of fever (Tmax = 102F)'. \
Whenever NBNB comes up in the context of vomiting, do not write 'non-bilious, non-bloody.' Just keep it as 'NBNB.' \
After the HPI, provide a list of 4-5 differential diagnoses from an Emergency Medicine perspective with brief explanations. \
The only acceptable ways to display the differential diagnoses are just using the title of the diagnosis like 'Viral gastroenteritis'. \
However, you may also only use statements such as 'Also consider,' 'Doubt,' 'Considered but ruled out.' Keep it concise here.";

const SAMPLE_PREAMBLE: &str = "Format and write HPIs in the same syntax and method as the sample. \
Begin every HPI with 'with no significant past medical history' (if past medical history is empty/none) \
or 'with a past medical history of {pertinent PMH}'.\n\n\
Sample Input Data Format:\n\
1. Gender: male\n\
2. Past medical history: hypertension, hyperlipidemia, CKD stage III, afib\n\
3. Chief complaint: generalized weakness\n\
4. Onset/timing: for the past week but worse since last night\n\
5. Accompanied by: wife\n\
6. Additional symptoms: fever, chills, mild itchy rash to the left elbow\n\
7. Context: pt's wife noticed pt being more fatigued and lethargic over the past week but significantly worse since last night.\n\
8. Denies: nausea, vomiting, diarrhea, urinary symptoms\n\
9. Currently on eliquis\n\n\
Sample Output for the data above:\n\
\"with a past medical history of hypertension, hyperlipidemia, and chronic kidney disease stage III who presents to the Emergency Department \
complaining of one week of generalized weakness, worse since yesterday evening. Per wife, who is providing additional history at bedside, \
states that she has noticed that patient has been more fatigued and lethargic over the past week, and worse since last night, and looked very \
pale today morning. Patient states that he has also been having subjective fevers, chills, and a mild itchy rash to the left elbow. He denies any \
recent nausea, vomiting, diarrhea, urinary symptoms, or focal neuro deficits. Patient is currently taking Eliquis.\n\n\
Differential diagnoses includes:\n\
- Sepsis: Given fever, chills, weakness, and lethargy, infection leading to sepsis is a concern.\n\
- Anemia: Pallor and fatigue could indicate anemia, possibly secondary to CKD or another cause.\n\
- Adverse drug reaction (Eliquis): While Eliquis is an anticoagulant, rash and systemic symptoms could warrant considering a drug reaction or interaction.\n\
- Viral Syndrome: Fever, chills, fatigue, and rash can be seen with various viral illnesses.\"\n\n\
--- Now, generate an HPI for the following patient ---\n";

/// Structured encounter fields submitted by the client form.
/// Field names mirror the frontend payload, hence camelCase on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncounterForm {
    pub gender: String,
    pub past_medical_history: String,
    pub chief_complaint: String,
    pub onset_timing: String,
    pub accompanied_by: String,
    pub additional_symptoms: String,
    pub other_notes: String,
    pub pertinent_negatives: String,
    pub current_medications: String,
}

impl EncounterForm {
    /// True when the PMH field carries actual history rather than a
    /// none-equivalent placeholder.
    pub fn has_significant_pmh(&self) -> bool {
        let pmh = self.past_medical_history.trim().to_lowercase();
        !matches!(pmh.as_str(), "" | "none" | "no significant pmh" | "n/a")
    }
}

/// Build the full user prompt: instruction/sample preamble plus the
/// numbered patient data block.
pub fn build_hpi_prompt(form: &EncounterForm) -> String {
    let pmh = form.past_medical_history.trim();
    let mut prompt = String::from(SAMPLE_PREAMBLE);
    prompt.push_str(&format!("1. Gender: {}\n", form.gender));
    prompt.push_str(&format!(
        "2. Past medical history: {}\n",
        if pmh.is_empty() { "None" } else { pmh }
    ));
    prompt.push_str(&format!("3. Chief complaint: {}\n", form.chief_complaint));
    prompt.push_str(&format!("4. Onset/timing: {}\n", form.onset_timing));
    prompt.push_str(&format!(
        "5. Accompanied by/history by: {}\n",
        form.accompanied_by
    ));
    prompt.push_str(&format!("6. Other symptoms: {}\n", form.additional_symptoms));
    prompt.push_str(&format!("7. Context: {}\n", form.other_notes));
    prompt.push_str(&format!(
        "8. Pertinent negatives: {}\n",
        form.pertinent_negatives
    ));
    prompt.push_str(&format!(
        "9. Current medications: {}\n",
        form.current_medications
    ));
    prompt
}

/// Deterministic draft narrative used when no backend is configured.
pub fn local_draft(form: &EncounterForm) -> String {
    let pmh_intro = if form.has_significant_pmh() {
        format!(
            "with a past medical history of {}",
            form.past_medical_history.trim()
        )
    } else {
        "with no significant past medical history".to_string()
    };

    let accompanied = if form.accompanied_by.is_empty() {
        "patient"
    } else {
        &form.accompanied_by
    };
    let negatives = if form.pertinent_negatives.is_empty() {
        "any other acute complaints"
    } else {
        &form.pertinent_negatives
    };
    let medications = if form.current_medications.is_empty() {
        "none stated"
    } else {
        &form.current_medications
    };

    format!(
        "{pmh_intro} who presents to the ED complaining of {complaint}. \
The symptoms reportedly started {onset}. \
Additional history provided by {accompanied}. \
Patient endorses other symptoms including: {symptoms}. \
Context: {context}. \
Patient denies {negatives}. \
Current medications include: {medications}.\n\n\
Differential diagnoses includes:\n\
- Diagnosis 1: Based on chief complaint and onset.\n\
- Diagnosis 2: Considering other symptoms noted.\n\
- Diagnosis 3: Contextual factors may suggest this.\n\
- Diagnosis 4: Pertinent negatives might point away from alternatives, making this more likely.",
        complaint = form.chief_complaint,
        onset = form.onset_timing,
        symptoms = form.additional_symptoms,
        context = form.other_notes,
    )
}
