//! ルーティング

use crate::components::layout::Layout;
use crate::pages::{accuracy::ModelAccuracyPage, details::ModelDetailPage, predict::PredictPage};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            // 未定義のパスはトップへ
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <ParentRoute path=path!("") view=Layout>
                    <Route path=path!("") view=PredictPage />
                    <Route path=path!("accuracy") view=ModelAccuracyPage />
                    <Route path=path!("details") view=ModelDetailPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
