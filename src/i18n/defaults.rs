//! Built-in site copy

use super::strings::*;

fn s(text: &str) -> String {
    text.to_string()
}

pub(super) fn vietnamese() -> Strings {
    Strings {
        nav: NavStrings {
            services: s("Dịch Vụ"),
            ai_consult: s("Tư Vấn AI"),
            about: s("Giới Thiệu"),
            book_now: s("Đặt Lịch"),
        },
        hero: HeroStrings {
            badge: s("Tiệm Cắt Tóc Nam Cao Cấp"),
            title_main: s("Nghệ Thuật Của"),
            title_italic: s("Quý Ông Lịch Lãm"),
            subtitle: s("Trải nghiệm cắt tóc, cạo râu và chăm sóc da đẳng cấp giữa lòng Sài Gòn."),
            btn_book: s("Đặt Lịch Ngay"),
            btn_services: s("Xem Dịch Vụ"),
        },
        services: ServicesStrings {
            badge: s("Dịch Vụ Của Chúng Tôi"),
            title: s("Bảng Giá Dịch Vụ"),
            subtitle: s("Mỗi dịch vụ là một nghi thức được thực hiện bởi những thợ cả giàu kinh nghiệm."),
            details: s("Chi Tiết"),
            mins: s("phút"),
            starting_at: s("Chỉ từ"),
            all: s("Tất Cả"),
            hair: s("Tóc"),
            beard: s("Râu"),
            spa: s("Spa"),
        },
        consultation: ConsultationStrings {
            badge: s("Trí Tuệ Nhân Tạo"),
            title: s("Tư Vấn Phong Cách AI"),
            subtitle: s("Mô tả mái tóc hoặc tải ảnh lên, chuyên gia AI sẽ gợi ý kiểu tóc và liệu trình phù hợp."),
            label_desc: s("Mô tả tóc và mong muốn của bạn"),
            placeholder_desc: s("Ví dụ: Tóc dày, hơi xoăn, muốn kiểu gọn gàng cho công sở..."),
            upload_btn: s("Tải ảnh chân dung"),
            remove_btn: s("Xóa"),
            submit_btn: s("Nhận Tư Vấn"),
            analyzing: s("Đang phân tích..."),
            verdict: s("Lời Khuyên Của Chuyên Gia"),
            suggested: s("Dịch Vụ Đề Xuất"),
            tips: s("Mẹo Tạo Kiểu"),
            book_regimen: s("Đặt Liệu Trình Này"),
            awaiting_title: s("Đang chờ thông tin"),
            awaiting_desc: s("Hãy mô tả mái tóc của bạn để nhận tư vấn cá nhân hóa."),
            photo_error: s("Không thể đọc ảnh này."),
            error: s("Xin lỗi, chuyên gia AI đang bận. Vui lòng thử lại sau."),
        },
        booking: BookingStrings {
            title: s("Đặt Lịch Hẹn"),
            subtitle: s("Chỉ vài bước để có trải nghiệm hoàn hảo."),
            step1: s("Dịch Vụ"),
            step2: s("Thợ Cắt"),
            step3: s("Thời Gian"),
            step4: s("Thông Tin"),
            select_service: s("Chọn Dịch Vụ"),
            select_barber: s("Chọn Thợ Cắt"),
            select_date_time: s("Chọn Ngày & Giờ"),
            customer_info: s("Thông Tin Khách Hàng"),
            invalid_date: s("Ngày không hợp lệ"),
            full_name: s("Họ và Tên"),
            phone: s("Số Điện Thoại"),
            summary: s("Tóm Tắt"),
            total: s("Tổng Cộng"),
            confirm_booking: s("XÁC NHẬN ĐẶT LỊCH"),
            next: s("Tiếp Theo"),
            prev: s("Quay Lại"),
            success: s("Đặt Lịch Thành Công!"),
            success_desc: s("Cảm ơn quý khách. Chúng tôi sẽ liên hệ để xác nhận lịch hẹn."),
            back_to_home: s("Về Trang Chủ"),
        },
        concierge: ConciergeStrings {
            title: s("Trợ Lý LuxeCut"),
            welcome: s("Xin chào quý khách! Tôi có thể giúp gì cho quý khách hôm nay?"),
            placeholder: s("Nhập câu hỏi..."),
            error: s("Xin lỗi, đã có lỗi xảy ra. Vui lòng thử lại."),
        },
        admin: AdminStrings {
            title: s("Quản Trị"),
            overview: s("Tổng Quan"),
            bookings_tab: s("Lịch Hẹn"),
            services_tab: s("Dịch Vụ"),
            content_tab: s("Nội Dung"),
            social_tab: s("Mạng Xã Hội"),
            add_service: s("Thêm Dịch Vụ"),
            edit: s("Sửa"),
            delete: s("Xóa"),
            save: s("Lưu"),
            cancel: s("Hủy"),
            discard: s("Hoàn Tác"),
            confirm_delete: s("Xóa dịch vụ này?"),
            service_saved: s("Đã lưu dịch vụ"),
            service_deleted: s("Đã xóa dịch vụ"),
            content_saved: s("Đã lưu nội dung"),
            stats: AdminStatsStrings {
                revenue: s("Doanh Thu"),
                total_bookings: s("Tổng Lịch Hẹn"),
                active_services: s("Dịch Vụ Hoạt Động"),
            },
            labels: AdminLabelStrings {
                title_vi: s("Tên (Tiếng Việt)"),
                title_en: s("Tên (Tiếng Anh)"),
                description_vi: s("Mô Tả (Tiếng Việt)"),
                description_en: s("Mô Tả (Tiếng Anh)"),
                price: s("Giá (VND)"),
                duration: s("Thời Lượng (phút)"),
                category: s("Danh Mục"),
                image_url: s("Ảnh (URL)"),
                facebook: s("Facebook"),
                instagram: s("Instagram"),
                twitter: s("Twitter"),
            },
        },
    }
}

pub(super) fn english() -> Strings {
    Strings {
        nav: NavStrings {
            services: s("Services"),
            ai_consult: s("AI Consult"),
            about: s("About"),
            book_now: s("Book Now"),
        },
        hero: HeroStrings {
            badge: s("Premium Gentlemen's Barbershop"),
            title_main: s("The Art of the"),
            title_italic: s("Modern Gentleman"),
            subtitle: s("World-class cuts, shaves and skincare in the heart of Saigon."),
            btn_book: s("Book Now"),
            btn_services: s("Our Services"),
        },
        services: ServicesStrings {
            badge: s("What We Offer"),
            title: s("Service Menu"),
            subtitle: s("Every service is a ritual performed by seasoned master barbers."),
            details: s("Details"),
            mins: s("mins"),
            starting_at: s("Starting at"),
            all: s("All"),
            hair: s("Hair"),
            beard: s("Beard"),
            spa: s("Spa"),
        },
        consultation: ConsultationStrings {
            badge: s("Artificial Intelligence"),
            title: s("AI Style Consultation"),
            subtitle: s("Describe your hair or upload a photo and our AI expert will suggest the right cut and treatments."),
            label_desc: s("Describe your hair and goals"),
            placeholder_desc: s("E.g. Thick, slightly wavy hair, want something neat for the office..."),
            upload_btn: s("Upload a portrait"),
            remove_btn: s("Remove"),
            submit_btn: s("Get Consultation"),
            analyzing: s("Analyzing..."),
            verdict: s("The Expert's Verdict"),
            suggested: s("Suggested Services"),
            tips: s("Styling Tips"),
            book_regimen: s("Book This Regimen"),
            awaiting_title: s("Awaiting your details"),
            awaiting_desc: s("Describe your hair to receive a personalized consultation."),
            photo_error: s("Could not read that photo."),
            error: s("Sorry, our AI expert is unavailable right now. Please try again later."),
        },
        booking: BookingStrings {
            title: s("Book an Appointment"),
            subtitle: s("A few steps to a flawless experience."),
            step1: s("Service"),
            step2: s("Barber"),
            step3: s("Date & Time"),
            step4: s("Details"),
            select_service: s("Select a Service"),
            select_barber: s("Choose Your Barber"),
            select_date_time: s("Pick a Date & Time"),
            customer_info: s("Your Details"),
            invalid_date: s("That date is not valid"),
            full_name: s("Full Name"),
            phone: s("Phone Number"),
            summary: s("Summary"),
            total: s("Total"),
            confirm_booking: s("CONFIRM BOOKING"),
            next: s("Next"),
            prev: s("Back"),
            success: s("Booking Confirmed!"),
            success_desc: s("Thank you. We will contact you shortly to confirm your appointment."),
            back_to_home: s("Back to Home"),
        },
        concierge: ConciergeStrings {
            title: s("LuxeCut Concierge"),
            welcome: s("Good day! How may I assist you today?"),
            placeholder: s("Ask a question..."),
            error: s("Apologies, something went wrong. Please try again."),
        },
        admin: AdminStrings {
            title: s("Admin"),
            overview: s("Overview"),
            bookings_tab: s("Bookings"),
            services_tab: s("Services"),
            content_tab: s("Content"),
            social_tab: s("Social Links"),
            add_service: s("Add Service"),
            edit: s("Edit"),
            delete: s("Delete"),
            save: s("Save"),
            cancel: s("Cancel"),
            discard: s("Discard"),
            confirm_delete: s("Delete this service?"),
            service_saved: s("Service saved"),
            service_deleted: s("Service deleted"),
            content_saved: s("Content saved"),
            stats: AdminStatsStrings {
                revenue: s("Revenue"),
                total_bookings: s("Total Bookings"),
                active_services: s("Active Services"),
            },
            labels: AdminLabelStrings {
                title_vi: s("Title (Vietnamese)"),
                title_en: s("Title (English)"),
                description_vi: s("Description (Vietnamese)"),
                description_en: s("Description (English)"),
                price: s("Price (VND)"),
                duration: s("Duration (min)"),
                category: s("Category"),
                image_url: s("Image URL"),
                facebook: s("Facebook"),
                instagram: s("Instagram"),
                twitter: s("Twitter"),
            },
        },
    }
}
