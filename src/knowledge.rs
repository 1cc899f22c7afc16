//! Clinical symptom knowledge base
//!
//! A curated, immutable table of symptom entries with synonyms,
//! classification codes, urgency tiers and cross-references into the
//! condition and assessment-tool catalogs. Loaded once on first access and
//! read-only for the lifetime of the process.

use serde::Serialize;
use std::sync::LazyLock;

/// Urgency tier attached to a symptom entry.
///
/// Variant order defines the total order used as the primary sort key:
/// `Emergency > High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
}

impl Urgency {
    /// Flat relevance-score bonus applied once per entry per query
    pub fn score_bonus(&self) -> u32 {
        match self {
            Urgency::Emergency => 10,
            Urgency::High => 8,
            Urgency::Medium => 5,
            Urgency::Low => 2,
        }
    }

    /// Display label for formatted output
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Emergency => "EMERGENCY",
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

/// One row of the knowledge base. Identity is the `symptom` field, which is
/// unique within the table.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomEntry {
    /// Canonical display name
    pub symptom: String,
    /// Clinical/latinate synonyms
    pub medical_terms: Vec<String>,
    /// Patient-facing phrasings
    pub common_terms: Vec<String>,
    /// External classification codes (ICD-10-CM style)
    pub codes: Vec<String>,
    /// Identifiers into the condition catalog (opaque here)
    pub associated_conditions: Vec<String>,
    pub urgency: Urgency,
    /// Identifiers into the assessment/calculator tool catalog (opaque here)
    pub associated_tools: Vec<String>,
    /// Free text shown with results; never matched against
    pub description: String,
    /// Findings that warrant escalation; never matched against
    pub red_flags: Vec<String>,
    /// Differential diagnoses; never matched against
    pub differentials: Vec<String>,
    pub physical_exam_findings: Vec<String>,
    pub diagnostic_tests: Vec<String>,
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The knowledge base, built on first access and shared for the process
/// lifetime. Entries are ordered roughly by presenting frequency; that
/// order is the stable tiebreaker for equal-urgency, equal-score results.
static KNOWLEDGE_BASE: LazyLock<Vec<SymptomEntry>> = LazyLock::new(build_entries);

/// Read-only view of the knowledge base
pub fn knowledge_base() -> &'static [SymptomEntry] {
    &KNOWLEDGE_BASE
}

fn build_entries() -> Vec<SymptomEntry> {
    vec![
        SymptomEntry {
            symptom: "chest pain".into(),
            medical_terms: strs(&["angina pectoris", "retrosternal pain", "thoracic pain"]),
            common_terms: strs(&[
                "chest tightness",
                "pressure in chest",
                "chest discomfort",
            ]),
            codes: strs(&["R07.9", "R07.4"]),
            associated_conditions: strs(&[
                "acute-coronary-syndrome",
                "pulmonary-embolism",
                "aortic-dissection",
                "pericarditis",
                "gerd",
            ]),
            urgency: Urgency::Emergency,
            associated_tools: strs(&["heart-score", "timi-risk", "perc-rule"]),
            description: "Pain or discomfort anywhere in the anterior thorax. Cardiac, \
                          pulmonary, vascular, gastrointestinal and musculoskeletal causes \
                          overlap heavily; exertional or pressure-like pain is cardiac until \
                          proven otherwise."
                .into(),
            red_flags: strs(&[
                "Crushing pain radiating to arm or jaw",
                "Diaphoresis with nausea",
                "Hypotension or syncope",
                "Tearing pain radiating to the back",
                "New oxygen requirement",
            ]),
            differentials: strs(&[
                "Acute coronary syndrome",
                "Pulmonary embolism",
                "Aortic dissection",
                "Pneumothorax",
                "GERD",
                "Costochondritis",
            ]),
            physical_exam_findings: strs(&[
                "Blood pressure in both arms",
                "Chest wall tenderness",
                "Murmur or rub on auscultation",
            ]),
            diagnostic_tests: strs(&["ECG", "Troponin", "Chest x-ray", "D-dimer"]),
        },
        SymptomEntry {
            symptom: "dyspnea".into(),
            medical_terms: strs(&[
                "shortness of breath",
                "breathlessness",
                "respiratory distress",
            ]),
            common_terms: strs(&[
                "short of breath",
                "cant catch my breath",
                "winded",
            ]),
            codes: strs(&["R06.00", "R06.02"]),
            associated_conditions: strs(&[
                "heart-failure",
                "copd",
                "asthma",
                "pulmonary-embolism",
                "pneumonia",
            ]),
            urgency: Urgency::Emergency,
            associated_tools: strs(&["wells-pe", "curb-65"]),
            description: "Subjective difficulty breathing, at rest or on exertion. Acute \
                          onset, unilateral chest signs or hypoxia point to an emergent \
                          cardiopulmonary cause."
                .into(),
            red_flags: strs(&[
                "Breathlessness at rest or speaking in single words",
                "Oxygen saturation below 92%",
                "Unilateral pleuritic pain with risk factors for thromboembolism",
                "Stridor",
            ]),
            differentials: strs(&[
                "Heart failure",
                "COPD exacerbation",
                "Asthma",
                "Pulmonary embolism",
                "Pneumonia",
                "Anemia",
            ]),
            physical_exam_findings: strs(&[
                "Respiratory rate and oxygen saturation",
                "Wheeze or crackles on auscultation",
                "Jugular venous distension",
                "Peripheral edema",
            ]),
            diagnostic_tests: strs(&["Chest x-ray", "ECG", "BNP", "Arterial blood gas"]),
        },
        SymptomEntry {
            symptom: "altered mental status".into(),
            medical_terms: strs(&["confusion", "delirium", "encephalopathy"]),
            common_terms: strs(&[
                "acting confused",
                "not making sense",
                "disoriented",
            ]),
            codes: strs(&["R41.0", "R41.82"]),
            associated_conditions: strs(&[
                "hypoglycemia",
                "sepsis",
                "stroke",
                "intoxication",
                "uremia",
            ]),
            urgency: Urgency::Emergency,
            associated_tools: strs(&["gcs", "cam-icu"]),
            description: "Acute change in cognition, attention or level of consciousness. \
                          Always secondary to an underlying insult; reversible causes must \
                          be excluded first."
                .into(),
            red_flags: strs(&[
                "Focal neurological deficit",
                "Fever with neck stiffness",
                "Head trauma on anticoagulation",
                "Glucose below 3.0 mmol/L",
            ]),
            differentials: strs(&[
                "Hypoglycemia",
                "Sepsis",
                "Stroke",
                "Drug or alcohol intoxication",
                "Hepatic encephalopathy",
                "Nonconvulsive status epilepticus",
            ]),
            physical_exam_findings: strs(&[
                "Glasgow Coma Scale",
                "Pupillary response",
                "Asterixis",
            ]),
            diagnostic_tests: strs(&[
                "Capillary glucose",
                "CT head",
                "Electrolytes and renal function",
                "Blood cultures",
            ]),
        },
        SymptomEntry {
            symptom: "headache".into(),
            medical_terms: strs(&["cephalalgia", "migraine", "cephalgia"]),
            common_terms: strs(&["head pain", "pounding head", "splitting headache"]),
            codes: strs(&["R51.9"]),
            associated_conditions: strs(&[
                "migraine",
                "tension-headache",
                "subarachnoid-hemorrhage",
                "temporal-arteritis",
                "meningitis",
            ]),
            urgency: Urgency::High,
            associated_tools: strs(&["ottawa-sah-rule", "midas-score"]),
            description: "Most headaches are primary (migraine, tension, cluster). The task \
                          is spotting the rare secondary headache: sudden onset, systemic \
                          features or neurological signs."
                .into(),
            red_flags: strs(&[
                "Thunderclap onset reaching maximum within a minute",
                "Worst headache of life",
                "Fever with neck stiffness or rash",
                "New focal deficit or papilledema",
                "New headache over age 50",
            ]),
            differentials: strs(&[
                "Migraine",
                "Tension-type headache",
                "Subarachnoid hemorrhage",
                "Meningitis",
                "Temporal arteritis",
                "Intracranial mass",
            ]),
            physical_exam_findings: strs(&[
                "Neck stiffness",
                "Fundoscopy for papilledema",
                "Temporal artery tenderness",
            ]),
            diagnostic_tests: strs(&["CT head", "Lumbar puncture", "ESR and CRP"]),
        },
        SymptomEntry {
            symptom: "abdominal pain".into(),
            medical_terms: strs(&[
                "epigastric pain",
                "right lower quadrant pain",
                "peritonism",
            ]),
            common_terms: strs(&["stomach ache", "belly pain", "tummy ache"]),
            codes: strs(&["R10.9", "R10.13"]),
            associated_conditions: strs(&[
                "appendicitis",
                "cholecystitis",
                "pancreatitis",
                "bowel-obstruction",
                "peptic-ulcer",
            ]),
            urgency: Urgency::High,
            associated_tools: strs(&["alvarado-score", "ranson-criteria"]),
            description: "Location, onset and migration narrow a broad differential. \
                          Rigidity, rebound or pain out of proportion to examination mark \
                          the surgical abdomen."
                .into(),
            red_flags: strs(&[
                "Rigid or board-like abdomen",
                "Pain out of proportion to examination",
                "Hematemesis or melena",
                "Pulsatile abdominal mass",
            ]),
            differentials: strs(&[
                "Appendicitis",
                "Cholecystitis",
                "Pancreatitis",
                "Bowel obstruction",
                "Ruptured abdominal aortic aneurysm",
                "Mesenteric ischemia",
            ]),
            physical_exam_findings: strs(&[
                "Rebound tenderness and guarding",
                "Murphy's sign",
                "Bowel sounds",
            ]),
            diagnostic_tests: strs(&["Lipase", "Abdominal ultrasound", "CT abdomen", "Lactate"]),
        },
        SymptomEntry {
            symptom: "syncope".into(),
            medical_terms: strs(&[
                "fainting",
                "transient loss of consciousness",
                "vasovagal episode",
            ]),
            common_terms: strs(&["passed out", "blacked out", "fainted"]),
            codes: strs(&["R55"]),
            associated_conditions: strs(&[
                "arrhythmia",
                "orthostatic-hypotension",
                "aortic-stenosis",
                "seizure",
            ]),
            urgency: Urgency::High,
            associated_tools: strs(&["san-francisco-syncope"]),
            description: "Transient self-limited loss of consciousness from global cerebral \
                          hypoperfusion. Exertional onset, absent prodrome or structural \
                          heart disease suggest a cardiac cause."
                .into(),
            red_flags: strs(&[
                "Syncope during exertion",
                "No prodrome, injury on collapse",
                "Family history of sudden death",
                "Abnormal ECG",
            ]),
            differentials: strs(&[
                "Vasovagal syncope",
                "Orthostatic hypotension",
                "Cardiac arrhythmia",
                "Aortic stenosis",
                "Seizure",
            ]),
            physical_exam_findings: strs(&[
                "Orthostatic blood pressure",
                "Ejection murmur",
                "Tongue laceration",
            ]),
            diagnostic_tests: strs(&["ECG", "Orthostatic vitals", "Echocardiogram"]),
        },
        SymptomEntry {
            symptom: "hemoptysis".into(),
            medical_terms: strs(&["blood in sputum", "expectoration of blood"]),
            common_terms: strs(&["coughing up blood", "blood when coughing"]),
            codes: strs(&["R04.2"]),
            associated_conditions: strs(&[
                "tuberculosis",
                "lung-cancer",
                "pulmonary-embolism",
                "bronchiectasis",
            ]),
            urgency: Urgency::High,
            associated_tools: strs(&["wells-pe"]),
            description: "Expectorated blood from the lower respiratory tract. Volume drives \
                          immediate management; etiology drives workup."
                .into(),
            red_flags: strs(&[
                "More than 100 mL in 24 hours",
                "Hemodynamic instability",
                "Hypoxia",
                "Weight loss and smoking history",
            ]),
            differentials: strs(&[
                "Bronchitis",
                "Tuberculosis",
                "Lung cancer",
                "Pulmonary embolism",
                "Bronchiectasis",
            ]),
            physical_exam_findings: strs(&["Focal crackles", "Clubbing", "Lymphadenopathy"]),
            diagnostic_tests: strs(&["Chest x-ray", "CT chest", "Sputum culture and cytology"]),
        },
        SymptomEntry {
            symptom: "leg swelling".into(),
            medical_terms: strs(&["peripheral edema", "unilateral limb edema"]),
            common_terms: strs(&["swollen leg", "puffy ankles", "swollen ankles"]),
            codes: strs(&["R60.0"]),
            associated_conditions: strs(&[
                "dvt",
                "heart-failure",
                "cellulitis",
                "venous-insufficiency",
            ]),
            urgency: Urgency::High,
            associated_tools: strs(&["wells-dvt"]),
            description: "Unilateral swelling is thrombosis or infection until excluded; \
                          bilateral swelling points to a systemic cause such as cardiac, \
                          renal or hepatic failure."
                .into(),
            red_flags: strs(&[
                "Unilateral swelling with calf tenderness",
                "Associated chest pain or dyspnea",
                "Spreading erythema with fever",
            ]),
            differentials: strs(&[
                "Deep vein thrombosis",
                "Cellulitis",
                "Heart failure",
                "Venous insufficiency",
                "Nephrotic syndrome",
            ]),
            physical_exam_findings: strs(&[
                "Calf circumference difference",
                "Pitting versus non-pitting edema",
                "Warmth and erythema",
            ]),
            diagnostic_tests: strs(&["D-dimer", "Venous doppler ultrasound", "BNP"]),
        },
        SymptomEntry {
            symptom: "fever".into(),
            medical_terms: strs(&["pyrexia", "febrile illness", "hyperthermia"]),
            common_terms: strs(&[
                "high temperature",
                "running a temperature",
                "feeling hot",
            ]),
            codes: strs(&["R50.9"]),
            associated_conditions: strs(&["sepsis", "influenza", "uti", "pneumonia"]),
            urgency: Urgency::Medium,
            associated_tools: strs(&["curb-65", "qsofa"]),
            description: "Core temperature above 38.0 C. The question is never the number \
                          alone but the source and the host: immunosuppression, recent \
                          travel, indwelling devices."
                .into(),
            red_flags: strs(&[
                "Hypotension or altered mentation",
                "Non-blanching rash",
                "Neutropenia or immunosuppression",
                "Recent tropical travel",
            ]),
            differentials: strs(&[
                "Viral upper respiratory infection",
                "Pneumonia",
                "Urinary tract infection",
                "Sepsis",
                "Malaria",
            ]),
            physical_exam_findings: strs(&[
                "Full septic screen examination",
                "Nuchal rigidity",
                "Skin survey for rash",
            ]),
            diagnostic_tests: strs(&["Blood cultures", "Urinalysis", "Chest x-ray", "CBC"]),
        },
        SymptomEntry {
            symptom: "dizziness".into(),
            medical_terms: strs(&["vertigo", "presyncope", "disequilibrium"]),
            common_terms: strs(&["room spinning", "feeling faint", "off balance"]),
            codes: strs(&["R42"]),
            associated_conditions: strs(&[
                "bppv",
                "orthostatic-hypotension",
                "menieres-disease",
                "posterior-stroke",
            ]),
            urgency: Urgency::Medium,
            associated_tools: strs(&["dix-hallpike", "hints-exam"]),
            description: "Separate true vertigo (illusion of motion) from presyncope and \
                          disequilibrium; the three have disjoint workups."
                .into(),
            red_flags: strs(&[
                "Sudden onset with ataxia or diplopia",
                "New severe occipital headache",
                "Inability to stand or walk",
            ]),
            differentials: strs(&[
                "Benign paroxysmal positional vertigo",
                "Vestibular neuritis",
                "Meniere's disease",
                "Orthostatic hypotension",
                "Posterior circulation stroke",
            ]),
            physical_exam_findings: strs(&[
                "Nystagmus characterization",
                "Dix-Hallpike maneuver",
                "Gait assessment",
            ]),
            diagnostic_tests: strs(&["Orthostatic vitals", "MRI brain if central signs"]),
        },
        SymptomEntry {
            symptom: "palpitations".into(),
            medical_terms: strs(&["tachycardia", "irregular heartbeat", "extrasystoles"]),
            common_terms: strs(&[
                "racing heart",
                "heart skipping beats",
                "pounding heart",
            ]),
            codes: strs(&["R00.2"]),
            associated_conditions: strs(&[
                "atrial-fibrillation",
                "anxiety",
                "hyperthyroidism",
                "svt",
            ]),
            urgency: Urgency::Medium,
            associated_tools: strs(&["chads2-vasc"]),
            description: "Awareness of the heartbeat. Captured rhythm during symptoms is \
                          the single most useful piece of data."
                .into(),
            red_flags: strs(&[
                "Palpitations with syncope",
                "Known structural heart disease",
                "Sustained rate above 150",
            ]),
            differentials: strs(&[
                "Atrial fibrillation",
                "Supraventricular tachycardia",
                "Anxiety",
                "Hyperthyroidism",
                "Premature ventricular contractions",
            ]),
            physical_exam_findings: strs(&["Pulse rate and regularity", "Thyroid examination"]),
            diagnostic_tests: strs(&["ECG", "Holter monitor", "TSH", "Electrolytes"]),
        },
        SymptomEntry {
            symptom: "nausea and vomiting".into(),
            medical_terms: strs(&["emesis", "hyperemesis"]),
            common_terms: strs(&["throwing up", "feeling sick", "queasy"]),
            codes: strs(&["R11.2", "R11.0"]),
            associated_conditions: strs(&[
                "gastroenteritis",
                "pregnancy",
                "bowel-obstruction",
                "migraine",
            ]),
            urgency: Urgency::Medium,
            associated_tools: strs(&[]),
            description: "Usually self-limited gastroenteritis; bilious or feculent emesis, \
                          distension or obstipation change the picture."
                .into(),
            red_flags: strs(&[
                "Bilious or feculent vomiting",
                "Signs of dehydration with oliguria",
                "Hematemesis",
            ]),
            differentials: strs(&[
                "Gastroenteritis",
                "Bowel obstruction",
                "Pregnancy",
                "Migraine",
                "Diabetic ketoacidosis",
            ]),
            physical_exam_findings: strs(&[
                "Hydration status",
                "Abdominal distension",
                "Succussion splash",
            ]),
            diagnostic_tests: strs(&["Electrolytes", "Pregnancy test", "Abdominal x-ray"]),
        },
        SymptomEntry {
            symptom: "rash".into(),
            medical_terms: strs(&["exanthem", "dermatitis", "urticaria"]),
            common_terms: strs(&["skin eruption", "hives", "itchy skin"]),
            codes: strs(&["R21"]),
            associated_conditions: strs(&[
                "allergic-reaction",
                "eczema",
                "psoriasis",
                "meningococcemia",
            ]),
            urgency: Urgency::Medium,
            associated_tools: strs(&[]),
            description: "Morphology, distribution and timeline classify most eruptions. \
                          Fever plus petechiae is a medical emergency."
                .into(),
            red_flags: strs(&[
                "Non-blanching petechiae with fever",
                "Mucosal involvement or skin sloughing",
                "Rapidly spreading with airway symptoms",
            ]),
            differentials: strs(&[
                "Urticaria",
                "Contact dermatitis",
                "Viral exanthem",
                "Drug eruption",
                "Meningococcemia",
            ]),
            physical_exam_findings: strs(&[
                "Blanching on pressure",
                "Distribution pattern",
                "Nikolsky sign",
            ]),
            diagnostic_tests: strs(&["CBC", "Blood cultures if febrile", "Skin biopsy"]),
        },
        SymptomEntry {
            symptom: "dysuria".into(),
            medical_terms: strs(&["painful urination", "micturition pain"]),
            common_terms: strs(&["burning when peeing", "pain passing urine"]),
            codes: strs(&["R30.0"]),
            associated_conditions: strs(&["uti", "pyelonephritis", "sti", "prostatitis"]),
            urgency: Urgency::Medium,
            associated_tools: strs(&[]),
            description: "Burning or pain with urination, most often lower urinary tract \
                          infection in women; consider urethritis and prostatitis in men."
                .into(),
            red_flags: strs(&[
                "Fever with flank pain",
                "Rigors",
                "Urinary retention",
            ]),
            differentials: strs(&[
                "Cystitis",
                "Pyelonephritis",
                "Urethritis",
                "Prostatitis",
                "Vaginitis",
            ]),
            physical_exam_findings: strs(&["Costovertebral angle tenderness", "Suprapubic tenderness"]),
            diagnostic_tests: strs(&["Urinalysis", "Urine culture", "STI testing"]),
        },
        SymptomEntry {
            symptom: "weight loss".into(),
            medical_terms: strs(&["cachexia", "unintentional weight loss"]),
            common_terms: strs(&[
                "losing weight without trying",
                "clothes getting loose",
            ]),
            codes: strs(&["R63.4"]),
            associated_conditions: strs(&[
                "malignancy",
                "hyperthyroidism",
                "diabetes",
                "depression",
            ]),
            urgency: Urgency::Medium,
            associated_tools: strs(&["must-score"]),
            description: "More than 5% of body weight over 6 months without intent. \
                          Malignancy, endocrine disease and depression head the list."
                .into(),
            red_flags: strs(&[
                "Night sweats and fevers",
                "Dysphagia",
                "Blood in stool",
            ]),
            differentials: strs(&[
                "Malignancy",
                "Hyperthyroidism",
                "Diabetes mellitus",
                "Depression",
                "Malabsorption",
            ]),
            physical_exam_findings: strs(&["Lymphadenopathy", "Thyroid examination", "Abdominal masses"]),
            diagnostic_tests: strs(&["CBC", "TSH", "HbA1c", "Chest x-ray"]),
        },
        SymptomEntry {
            symptom: "cough".into(),
            medical_terms: strs(&["tussis", "productive cough"]),
            common_terms: strs(&["hacking cough", "dry cough", "chesty cough"]),
            codes: strs(&["R05.9", "R05.1"]),
            associated_conditions: strs(&[
                "viral-uri",
                "asthma",
                "gerd",
                "post-nasal-drip",
            ]),
            urgency: Urgency::Low,
            associated_tools: strs(&["curb-65"]),
            description: "Acute cough is nearly always viral. Duration beyond eight weeks \
                          defines chronic cough with its own short differential."
                .into(),
            red_flags: strs(&[
                "Hemoptysis",
                "Weight loss in a smoker",
                "Cough beyond eight weeks",
            ]),
            differentials: strs(&[
                "Viral upper respiratory infection",
                "Asthma",
                "GERD",
                "Post-nasal drip",
                "ACE-inhibitor cough",
            ]),
            physical_exam_findings: strs(&["Auscultation for wheeze or crackles"]),
            diagnostic_tests: strs(&["Chest x-ray if persistent", "Spirometry"]),
        },
        SymptomEntry {
            symptom: "fatigue".into(),
            medical_terms: strs(&["lethargy", "malaise", "asthenia"]),
            common_terms: strs(&["tired all the time", "no energy", "exhaustion"]),
            codes: strs(&["R53.83"]),
            associated_conditions: strs(&[
                "anemia",
                "hypothyroidism",
                "depression",
                "sleep-apnea",
            ]),
            urgency: Urgency::Low,
            associated_tools: strs(&["phq-9", "epworth-scale"]),
            description: "A screen of sleep, mood, medications and basic labs resolves the \
                          majority; persistent unexplained fatigue warrants systematic \
                          review."
                .into(),
            red_flags: strs(&[
                "Associated weight loss or night sweats",
                "New neurological deficit",
            ]),
            differentials: strs(&[
                "Anemia",
                "Hypothyroidism",
                "Depression",
                "Obstructive sleep apnea",
                "Chronic fatigue syndrome",
            ]),
            physical_exam_findings: strs(&["Conjunctival pallor", "Thyroid examination"]),
            diagnostic_tests: strs(&["CBC", "TSH", "Ferritin", "Glucose"]),
        },
        SymptomEntry {
            symptom: "back pain".into(),
            medical_terms: strs(&["lumbago", "lumbar pain", "sciatica"]),
            common_terms: strs(&["sore back", "lower back ache", "pulled back"]),
            codes: strs(&["M54.50", "M54.9"]),
            associated_conditions: strs(&[
                "muscle-strain",
                "disc-herniation",
                "spinal-stenosis",
            ]),
            urgency: Urgency::Low,
            associated_tools: strs(&["start-back-tool"]),
            description: "Mechanical low back pain is self-limited and needs no imaging. \
                          The red flags exist to catch cauda equina, infection and \
                          malignancy."
                .into(),
            red_flags: strs(&[
                "Saddle anesthesia",
                "Urinary retention or incontinence",
                "Bilateral leg weakness",
                "Fever with spinal tenderness",
                "History of malignancy",
            ]),
            differentials: strs(&[
                "Muscular strain",
                "Disc herniation",
                "Spinal stenosis",
                "Vertebral compression fracture",
                "Cauda equina syndrome",
            ]),
            physical_exam_findings: strs(&[
                "Straight leg raise",
                "Perianal sensation",
                "Lower limb power and reflexes",
            ]),
            diagnostic_tests: strs(&["MRI spine if red flags", "ESR"]),
        },
        SymptomEntry {
            symptom: "sore throat".into(),
            medical_terms: strs(&["pharyngitis", "odynophagia"]),
            common_terms: strs(&[
                "throat pain",
                "scratchy throat",
                "painful swallowing",
            ]),
            codes: strs(&["J02.9", "R07.0"]),
            associated_conditions: strs(&[
                "strep-pharyngitis",
                "viral-uri",
                "mononucleosis",
            ]),
            urgency: Urgency::Low,
            associated_tools: strs(&["centor-score"]),
            description: "Mostly viral. Scoring rules select the minority who benefit from \
                          testing or antibiotics; airway compromise is the only emergency."
                .into(),
            red_flags: strs(&[
                "Drooling or inability to swallow",
                "Muffled voice with trismus",
                "Stridor",
            ]),
            differentials: strs(&[
                "Viral pharyngitis",
                "Streptococcal pharyngitis",
                "Infectious mononucleosis",
                "Peritonsillar abscess",
                "Epiglottitis",
            ]),
            physical_exam_findings: strs(&[
                "Tonsillar exudate",
                "Tender anterior cervical nodes",
                "Uvular deviation",
            ]),
            diagnostic_tests: strs(&["Rapid strep test", "Monospot"]),
        },
        SymptomEntry {
            symptom: "joint pain".into(),
            medical_terms: strs(&["arthralgia", "polyarthralgia"]),
            common_terms: strs(&["achy joints", "sore knees", "stiff joints"]),
            codes: strs(&["M25.50"]),
            associated_conditions: strs(&[
                "osteoarthritis",
                "rheumatoid-arthritis",
                "gout",
                "septic-arthritis",
            ]),
            urgency: Urgency::Low,
            associated_tools: strs(&["das28"]),
            description: "Pattern recognition: number of joints, symmetry, inflammatory \
                          features. A single hot joint is septic arthritis until aspirated."
                .into(),
            red_flags: strs(&[
                "Single hot swollen joint with fever",
                "Inability to bear weight",
            ]),
            differentials: strs(&[
                "Osteoarthritis",
                "Rheumatoid arthritis",
                "Gout",
                "Septic arthritis",
                "Viral arthralgia",
            ]),
            physical_exam_findings: strs(&[
                "Effusion and warmth",
                "Range of motion",
                "Symmetry of involvement",
            ]),
            diagnostic_tests: strs(&["Joint aspiration", "Uric acid", "ESR and CRP"]),
        },
    ]
}
