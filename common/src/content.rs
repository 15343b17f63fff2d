//! 静的ページの内容（ナビゲーション・精度ページ・モデル詳細ページ）

/// サイドバーの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const APP_NAME: &str = "CardioRisk";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", label: "Predict Risk" },
    NavItem { path: "/accuracy", label: "Model Accuracy" },
    NavItem { path: "/details", label: "Model Details" },
];

/// パスが現在のナビ項目か（"/" は完全一致のみ）
pub fn is_nav_active(item: &NavItem, current_path: &str) -> bool {
    if item.path == "/" {
        current_path == "/" || current_path.is_empty()
    } else {
        current_path == item.path || current_path.starts_with(&format!("{}/", item.path))
    }
}

/// 画像読込失敗時の代替画像
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=Visualization+Not+Found";

/// 評価グラフ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotCard {
    pub src: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl PlotCard {
    /// 読込失敗後は代替画像
    pub fn image_src(&self, failed: bool) -> &'static str {
        if failed { PLACEHOLDER_IMAGE } else { self.src }
    }
}

pub const ACCURACY_PLOTS: &[PlotCard] = &[
    PlotCard {
        src: "/images/ROC curve ANN.png",
        title: "ROC Curve Analysis",
        description: "Trade-off between sensitivity and specificity.",
    },
    PlotCard {
        src: "/images/confusion matrix ANN.png",
        title: "Confusion Matrix",
        description: "Visualizing the performance of the classification algorithm.",
    },
    PlotCard {
        src: "/images/precision recall curve.png",
        title: "Precision-Recall",
        description: "Shows the trade-off between precision and recall.",
    },
    PlotCard {
        src: "/images/training vs validation.png",
        title: "Training History",
        description: "Model accuracy and loss over training epochs.",
    },
];

/// 見出しの指標
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlineMetric {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ACCURACY_METRICS: &[HeadlineMetric] = &[
    HeadlineMetric { value: "92.4%", label: "Accuracy" },
    HeadlineMetric { value: "0.89", label: "AUC Score" },
];

/// ネットワーク層の説明
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerDescription {
    pub name: &'static str,
    pub description: &'static str,
}

pub const MODEL_TAGLINE: &str = "Deep Learning Neural Network optimized for tabular health data.";

pub const MODEL_LAYERS: &[LayerDescription] = &[
    LayerDescription {
        name: "Input Layer",
        description: "Accepts 13 standardized features including vitals and lab results.",
    },
    LayerDescription {
        name: "Hidden Dense Layers",
        description: "Multi-layer perceptron with ReLU activation functions for non-linear \
            pattern recognition. Includes Dropout (0.3) for regularization.",
    },
    LayerDescription {
        name: "Output Layer",
        description: "Sigmoid activation function producing a probability score (0-1) for \
            binary classification.",
    },
];

pub const PREPROCESSING_STEPS: &[&str] = &[
    "Standard Scaling (Numerical)",
    "One-Hot Encoding (Categorical)",
    "Binary Mapping",
    "Missing Value Imputation",
];

pub const CONFIDENCE_SCORE: HeadlineMetric = HeadlineMetric {
    value: "92%",
    label: "Average accuracy on test validation sets.",
};
