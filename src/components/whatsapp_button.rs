use yew::prelude::*;

use super::icons::{Icon, SvgIcon};
use crate::config::{chat_url, PRIMARY_PHONE};

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    html! {
        <a href={chat_url(PRIMARY_PHONE)} target="_blank" rel="noopener noreferrer" class="chat-fab">
            <style>
                {r#"
                    .chat-fab {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        background: #25D366;
                        color: #fff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                        opacity: 0;
                        transform: scale(0);
                        animation: fab-pop 0.5s cubic-bezier(0.34, 1.56, 0.64, 1) 1s forwards;
                        transition: background 0.2s;
                    }
                    .chat-fab:hover { background: #20bd5a; }
                    .chat-fab:active { transform: scale(0.9); }
                    .chat-fab .tip {
                        position: absolute;
                        right: 100%;
                        margin-right: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 0.5rem;
                        background: #fff;
                        color: #000;
                        font-size: 0.875rem;
                        font-weight: 700;
                        white-space: nowrap;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.2s;
                    }
                    .chat-fab:hover .tip { opacity: 1; }
                    .chat-fab .ripple {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        border: 2px solid #25D366;
                        animation: fab-ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    @keyframes fab-pop {
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes fab-ping {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }
                "#}
            </style>
            <SvgIcon icon={Icon::MessageCircle} size={32} />
            <span class="tip">{"Chat with us!"}</span>
            <span class="ripple" />
        </a>
    }
}
